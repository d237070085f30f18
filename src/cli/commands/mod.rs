//! Subcommands of the `akinator` binary.

pub mod play;
pub mod questions;
pub mod simulate;
