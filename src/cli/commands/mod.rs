//! Command implementations

mod check;
mod init;
mod records;
mod rules;

pub use check::check;
pub use init::init;
pub use records::records;
pub use rules::rules;
