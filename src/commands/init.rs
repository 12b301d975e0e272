use crate::config::CONFIG_FILE_NAME;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG: &str = r#"# lambdagame configuration

# Names to count consonants in
names = ["Cristiano", "Michele", "Sergio", "Giuseppe", "Stefano"]

# Scenarios to run, in order (omit to run every scenario)
# scenarios = ["procedural", "closures", "pipeline"]

# Count every scenario must report in `lambdagame verify`
expected = 20

[output]
format = "terminal"
plain = false
"#;

/// Write a default config file into `dir`, returning its path.
pub fn init_config_in(dir: &Path, force: bool) -> Result<PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    std::fs::write(&config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    Ok(config_path)
}

pub fn init_config(force: bool) -> Result<()> {
    let path = init_config_in(Path::new("."), force)?;
    println!("Created {} configuration file", path.display());
    Ok(())
}
