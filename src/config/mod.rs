//! Optional `.lambdagame.toml` configuration.
//!
//! Values set on the command line override the file; anything unset in
//! both falls back to the built-in names, every scenario, and terminal
//! output.

mod core;
mod loader;

pub use self::core::{LambdaGameConfig, OutputConfig};
pub use self::loader::{
    directory_ancestors, discover_config, load_config, load_config_from,
    parse_and_validate_config, CONFIG_FILE_NAME,
};
