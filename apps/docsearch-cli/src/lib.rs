//! docsearch-cli
//!
//! Command-line and HTTP front ends over the docsearch engine.

pub mod cli;
pub mod commands;
pub mod server;
