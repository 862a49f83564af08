//! CLI command implementations.
//!
//! Each command validates its raw arguments, runs one engine query and
//! returns the formatted result.

pub mod dates;
pub mod request;
pub mod top_users;
pub mod user_dates;
