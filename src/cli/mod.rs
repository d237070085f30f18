//! CLI infrastructure for the guessing game
//!
//! This module provides the command-line interface for playing interactively,
//! simulating games against an oracle player, and listing question text.

pub mod commands;
pub mod config;
pub mod logging;
pub mod output;
