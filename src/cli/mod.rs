//! CLI module for lambdagame
//!
//! - Argument parsing (`args`)
//! - Runtime setup (`setup`)

pub mod args;
pub mod setup;

pub use args::{parse_args, Cli, CommonArgs, Commands};
pub use setup::{init_logging, use_color};
