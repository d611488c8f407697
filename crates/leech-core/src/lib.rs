//! Core utilities for the Leech lattice builder
//!
//! This crate provides fundamentals shared across the workspace:
//! - Fixed-width GF(2) word helpers (bit positions, masks, supports)
//! - Logging setup and debug macros

pub mod bits;
pub mod debug;

pub use bits::*;
