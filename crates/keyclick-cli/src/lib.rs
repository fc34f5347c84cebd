//! Keyclick CLI library.
//!
//! Command implementations, configuration loading and logging setup for the
//! `keyclick` binary.

pub mod commands;
pub mod config;
pub mod logging;
