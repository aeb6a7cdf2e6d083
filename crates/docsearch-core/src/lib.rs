//! Core types, configuration and artifact loading for docsearch.
//!
//! Uses Figment to merge `config.toml` + `config.<env>.toml` + `APP_*` env vars,
//! and reads the generator's search index artifact into plain domain types.
#![deny(unused_variables)]
#![deny(unused_imports)]

pub mod artifact;
pub mod config;
pub mod error;
pub mod traits;
pub mod types;

pub use error::{Error, Result};
