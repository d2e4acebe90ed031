//! Error types for parsing and conversion.
//!
//! Errors are layered:
//! - **Field errors**: a single distance or reading field could not be parsed
//! - **Conversion errors**: the run as a whole failed (I/O, CSV, row shape, or a
//!   field error tagged with its line number)
//! - **Initialization errors**: logger setup failed

mod types;

// Re-export public API
pub use types::{ConversionError, FieldError, InitializationError};
