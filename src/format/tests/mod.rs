//! Unit tests for the catalog codec.
//!
//! These tests cover parsing edge cases, export→import round trips and
//! file access.

mod roundtrip_tests;
