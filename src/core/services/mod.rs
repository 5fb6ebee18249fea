//! Business logic services
//!
//! Pure evaluation logic that operates on domain models. No I/O: subjects
//! and rule sets are passed in, reports are returned.
//!
//! - [`evaluator`] - Evaluate subjects against rule sets

pub mod evaluator;

pub use evaluator::{EvalError, evaluate, evaluate_all};
