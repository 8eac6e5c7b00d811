//! Unit tests - single-component tests that don't fit as inline module tests.

mod snapshot_tests;
