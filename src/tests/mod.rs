//! Internal test modules - whitebox tests with crate access
//!
//! Tests here drive the whole application through `TuiApp` on a
//! `TestBackend`, so they can reach state that the public API hides.
