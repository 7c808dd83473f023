//! Utilities for table_alter
//!
//! This module provides utility functions used across the library.

pub mod logging;
pub mod naming;

// Re-export key utility functions
pub use logging::init_logging;
pub use naming::{is_valid_table_name, unquote_identifier};
