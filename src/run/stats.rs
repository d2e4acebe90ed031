//! Per-run conversion counters.

use crate::units::Record;

/// Counts of rows processed and fields converted during one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionStats {
    /// Data rows written (header excluded)
    pub rows: usize,
    /// Distance fields that changed unit
    pub distances_converted: usize,
    /// Reading fields that changed unit
    pub readings_converted: usize,
}

impl ConversionStats {
    /// Records one processed row, comparing the parsed and converted records.
    pub fn record_row(&mut self, parsed: &Record, converted: &Record) {
        self.rows += 1;
        if parsed.distance.unit() != converted.distance.unit() {
            self.distances_converted += 1;
        }
        if parsed.reading.unit() != converted.reading.unit() {
            self.readings_converted += 1;
        }
    }

    /// Fields emitted verbatim because they were already in the target unit.
    pub fn passthrough_fields(&self) -> usize {
        self.rows * 2 - self.distances_converted - self.readings_converted
    }
}
