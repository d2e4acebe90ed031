//! Application initialization.
//!
//! The converter itself needs no shared resources; the only process-wide setup
//! is the logger used by the CLI.

mod logger;

// Re-export public API
pub use logger::init_logger_with;
