//! TOML-based rule-set storage
//!
//! Rule sets live in `.checkup.toml` files.
//!
//! - [`parser`] - Read, deserialize, and validate .checkup.toml files
//! - [`writer`] - Generate starter .checkup.toml files

pub mod parser;
pub mod writer;

pub use parser::{RuleEntry, RuleSet, RulesetError, RulesetFile, load_file, parse_ruleset};
pub use writer::starter_ruleset;
