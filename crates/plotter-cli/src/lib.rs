//! CLI library components for Plotter Studio.

pub mod commands;
pub mod logging;
