//! Core module tests
//!
//! Contains test suites for core functionality:
//! - Input validation tests
//! - Checksum tests (check digits, ISO 13616 validation)
//! - Builder tests (BBAN assembly, formatting, generation)
//! - Registry tests
//! - Type tests

#[cfg(test)]
mod checksum_tests;
#[cfg(test)]
mod types_tests;
