// File: crates/align-demo/src/lib.rs
// Summary: Caller-side adapter pieces shared by the demo binary and its tests.

pub mod columns;
pub mod run;

pub use columns::{load_columns, read_columns, Column};
pub use run::{run, Request};
