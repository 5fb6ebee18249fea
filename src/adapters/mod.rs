//! Adapter implementations around the pure core
//!
//! This module contains the concrete pieces that handle I/O:
//!
//! - `toml/` - `.checkup.toml` rule-set parsing and generation
//! - `file/` - Subject collection (directory walks, JSON record documents)

pub mod file;
pub mod toml;
