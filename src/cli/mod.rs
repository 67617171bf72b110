//! Command line interface for Topica.

pub mod args;
pub mod commands;
pub mod output;
