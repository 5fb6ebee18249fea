//! checkup - declarative completeness and compliance checks
//!
//! Thin binary entry point; all logic lives in the library crate.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
#![allow(clippy::cargo_common_metadata)]

/// Main entry point for the checkup CLI
fn main() {
    if let Err(err) = checkup::cli::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
