//! Internal test modules - whitebox tests with crate access
//!
//! Acceptance tests drive the real `TuiApp` over a `TestBackend` through
//! [`crate::test_harness::AcceptanceTestHarness`], with fake catalog and
//! trending stores behind the real effect runner.


// Rendered output
mod view_snapshots;
