//! Support library for the wayfind CLI binary.
//!
//! Re-exports the CLI module so doctests and integration tests can exercise
//! the query pipeline and the interactive menu without forking a subprocess.

pub mod cli;
pub mod logging;
