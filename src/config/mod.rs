//! Application configuration and constants.
//!
//! This module provides:
//! - Conversion constants (factors, unit suffixes)
//! - CLI option types and parsing
//! - Target unit selectors

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel};
