//! Command modules for the brst CLI.
//!
//! Each subcommand lives in its own file and exposes an `*Args` struct plus
//! a `run_*` function.

pub mod common;

pub mod check;
pub mod tokens;

pub use check::{run_check, CheckArgs};
pub use tokens::{run_tokens, TokensArgs};
