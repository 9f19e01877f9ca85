//! Config module tests
//!
//! - Registry file parsing (line format, comments, error line numbers)
//! - Registry loading from disk

#[cfg(test)]
mod loader_tests;
