//! Single test binary entry point.
//!
//! This consolidates all tests into a single binary following matklad's best
//! practices, reducing linking overhead from 3x to 1x.
//!
//! Structure:
//! - integration: Full gesture workflows driven through pointer events
//! - unit: Single-component tests (settings, perf, snapshots)

mod unit;
