//! Support library for the topogen CLI binary.
//!
//! Exposes the command and logging modules so doctests and integration tests
//! can drive graph generation without spawning a subprocess.

pub mod cli;
pub mod logging;
