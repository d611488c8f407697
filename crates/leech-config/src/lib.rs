//! Configuration management for the Leech lattice builder
//!
//! - TOML configuration file parsing
//! - Build configuration structures

pub mod build_config;
pub mod toml_config;

pub use build_config::*;
pub use toml_config::*;
