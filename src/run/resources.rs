//! Conversion resources.
//!
//! This module defines the `ConversionResources` struct which owns the CSV
//! reader and writer for one run. Both file handles are released when it is
//! dropped, on success and on every error path.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use csv::{Reader, ReaderBuilder, Terminator, Writer, WriterBuilder};

use crate::config::UTF8_BOM;
use crate::error_handling::ConversionError;

/// Open input and output for a single conversion run.
pub struct ConversionResources {
    /// CSV reader over the input file (header treated as an ordinary record)
    pub reader: Reader<BufReader<File>>,
    /// CSV writer over the output file
    pub writer: Writer<File>,
}

impl ConversionResources {
    /// Opens `input` for reading, then creates (or truncates) `output`.
    ///
    /// The output is only touched once the input has been opened successfully.
    /// A UTF-8 byte-order mark at the start of the input is written to the
    /// output ahead of the header, since the CSV reader drops it.
    ///
    /// # Errors
    ///
    /// Returns `ConversionError::Io` naming whichever path could not be opened,
    /// read, or written.
    pub fn open(input: &Path, output: &Path) -> Result<Self, ConversionError> {
        let input_err = |source: io::Error| ConversionError::Io {
            path: input.to_path_buf(),
            source,
        };
        let output_err = |source: io::Error| ConversionError::Io {
            path: output.to_path_buf(),
            source,
        };

        let mut input_file = BufReader::new(File::open(input).map_err(input_err)?);
        let has_bom = starts_with_bom(&mut input_file).map_err(input_err)?;

        let mut output_file = File::create(output).map_err(output_err)?;
        if has_bom {
            output_file.write_all(&UTF8_BOM).map_err(output_err)?;
        }

        Ok(Self {
            reader: csv_reader(input_file),
            writer: csv_writer(output_file),
        })
    }
}

/// Reports whether `source` begins with a UTF-8 byte-order mark, without consuming it.
pub(crate) fn starts_with_bom<R: BufRead>(source: &mut R) -> io::Result<bool> {
    Ok(source.fill_buf()?.starts_with(&UTF8_BOM))
}

/// Builds the reader used for input files.
///
/// Headers are read as a normal record so they can be copied through verbatim,
/// and row length is checked by the driver so it can report the line number.
pub(crate) fn csv_reader<R: io::Read>(source: R) -> Reader<R> {
    ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(source)
}

/// Builds the writer used for output files: `\n` terminated, quoting only when needed.
pub(crate) fn csv_writer<W: Write>(sink: W) -> Writer<W> {
    WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(sink)
}
