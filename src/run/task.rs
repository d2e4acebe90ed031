//! Row-by-row conversion loop.

use std::io::{Read, Write};

use csv::{Reader, Writer};
use log::debug;

use crate::config::FIELDS_PER_ROW;
use crate::error_handling::ConversionError;
use crate::units::{parse_record, DistanceUnit, TemperatureUnit};

use super::stats::ConversionStats;

/// Copies the header, then parses, converts, and writes every data row.
///
/// Stops at the first row that fails; rows before it have already been handed
/// to the writer.
///
/// # Errors
///
/// - `EmptyInput` if there is no header row
/// - `MalformedRow` if a data row does not have exactly three fields
/// - `Field` if a distance or reading cannot be parsed, or converts to a
///   non-finite magnitude
/// - `Csv` on read, UTF-8, or write failures
pub fn convert_records<R: Read, W: Write>(
    reader: &mut Reader<R>,
    writer: &mut Writer<W>,
    dist_target: DistanceUnit,
    temp_target: TemperatureUnit,
) -> Result<ConversionStats, ConversionError> {
    let mut rows = reader.records();
    let header = rows.next().ok_or(ConversionError::EmptyInput)??;
    writer.write_record(&header)?;

    let mut stats = ConversionStats::default();
    for result in rows {
        let row = result?;
        let line = row.position().map(|pos| pos.line()).unwrap_or_default();

        if row.len() != FIELDS_PER_ROW {
            return Err(ConversionError::MalformedRow {
                line,
                fields: row.len(),
            });
        }

        let parsed = parse_record(&row[0], &row[1], &row[2])
            .map_err(|source| ConversionError::Field { line, source })?;
        let converted = parsed
            .convert(dist_target, temp_target)
            .map_err(|source| ConversionError::Field { line, source })?;
        debug!(
            "line {}: {} -> {}, {} -> {}",
            line,
            parsed.distance,
            converted.distance,
            parsed.reading,
            converted.reading
        );

        writer.write_record(converted.fields())?;
        stats.record_row(&parsed, &converted);
    }

    Ok(stats)
}
