//! Command-line front end for the `runner-switch` converter.
//!
//! The binary lives in `main.rs`; the argument surface and command dispatch
//! are exposed here so integration tests can drive them directly.

pub mod cli;
