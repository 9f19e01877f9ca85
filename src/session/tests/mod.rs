//! Session module tests
//!
//! Tests for the generation state machine and the copied indicator
