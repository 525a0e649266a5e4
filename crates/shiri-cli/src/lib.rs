//! Command implementations behind the `shiritool` binary.

pub mod commands;
pub mod trace_init;
