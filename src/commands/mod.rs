//! CLI command implementations.
//!
//! Available commands:
//! - **run**: Run scenarios and print each consonant count
//! - **list**: List the available scenarios
//! - **verify**: Fail unless every scenario reports the same count
//! - **init**: Write a default configuration file

pub mod init;
pub mod list;
pub mod run;
pub mod verify;

pub use init::{init_config, init_config_in};
pub use list::list_scenarios;
pub use run::{handle_run, RunConfig};
pub use verify::{handle_verify, VerifyConfig};

use crate::config::{self, LambdaGameConfig};
use anyhow::{Context, Result};
use std::path::Path;

/// Load the file named on the command line, or discover one.
pub(crate) fn load_file_config(path: Option<&Path>) -> Result<LambdaGameConfig> {
    match path {
        Some(path) => config::load_config_from(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display())),
        None => Ok(config::load_config()),
    }
}
