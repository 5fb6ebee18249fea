//! checkup - declarative completeness and compliance checks
//!
//! This library provides the core functionality for evaluating subjects
//! (structured records or text content) against ordered, declarative rule
//! sets, and for reporting what is missing weighted by severity.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod output;
pub mod paths;
