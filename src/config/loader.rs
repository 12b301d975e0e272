use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::LambdaGameConfig;
use crate::errors::{Error, Result};
use crate::scenarios;

/// File name searched for in the working directory and its ancestors
pub const CONFIG_FILE_NAME: &str = ".lambdagame.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Pure function to parse and validate config from TOML string
pub fn parse_and_validate_config(contents: &str) -> Result<LambdaGameConfig> {
    let config = toml::from_str::<LambdaGameConfig>(contents)?;

    if let Some(selection) = &config.scenarios {
        if let Some(unknown) = selection
            .iter()
            .find(|name| scenarios::find(name).is_err())
        {
            return Err(Error::config(format!(
                "unknown scenario '{}' (available: {})",
                unknown,
                scenarios::names().join(", ")
            )));
        }
    }

    if let Some(names) = &config.names {
        if names.iter().any(|name| name.trim().is_empty()) {
            return Err(Error::config("names must not be blank"));
        }
    }

    Ok(config)
}

/// Load a config file the user asked for explicitly. Any failure is an error.
pub fn load_config_from(path: &Path) -> Result<LambdaGameConfig> {
    let contents = read_config_file(path).map_err(|e| {
        Error::config_with_path(format!("failed to read config: {}", e), path)
    })?;

    let config = parse_and_validate_config(&contents).map_err(|e| match e {
        Error::Config { message, .. } => Error::config_with_path(message, path),
        other => Error::config_with_path(other.to_string(), path),
    })?;

    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Pure function to try loading config from a specific path
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<LambdaGameConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!(
                "Ignoring invalid config {}: {}. Using defaults.",
                config_path.display(),
                e
            );
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for a config file.
pub fn discover_config(start: PathBuf) -> LambdaGameConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            LambdaGameConfig::default()
        })
}

/// Load configuration from the working directory hierarchy, or defaults
pub fn load_config() -> LambdaGameConfig {
    match std::env::current_dir() {
        Ok(current) => discover_config(current),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            LambdaGameConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::OutputFormat;
    use indoc::indoc;
    use tempfile::TempDir;

    #[test]
    fn test_parse_full_config() {
        let config = parse_and_validate_config(indoc! {r#"
            names = ["Ugo", "Anna"]
            scenarios = ["pipeline", "procedural"]
            expected = 5

            [output]
            format = "json"
            plain = true
        "#})
        .unwrap();

        assert_eq!(config.names(), vec!["Ugo", "Anna"]);
        assert_eq!(config.scenarios(), vec!["pipeline", "procedural"]);
        assert_eq!(config.expected, Some(5));
        assert_eq!(config.format(), OutputFormat::Json);
        assert!(config.plain());
    }

    #[test]
    fn test_parse_empty_config() {
        let config = parse_and_validate_config("").unwrap();
        assert_eq!(config, LambdaGameConfig::default());
    }

    #[test]
    fn test_rejects_unknown_scenario() {
        let err = parse_and_validate_config(r#"scenarios = ["streams"]"#).unwrap_err();
        assert!(err.to_string().contains("unknown scenario 'streams'"));
    }

    #[test]
    fn test_rejects_blank_name() {
        let err = parse_and_validate_config(r#"names = ["Ugo", "  "]"#).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_rejects_unknown_key() {
        let err = parse_and_validate_config("colour = true").unwrap_err();
        assert!(matches!(err, Error::Toml(_)));
    }

    #[test]
    fn test_load_config_from_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.toml");
        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, Error::Config { path: Some(ref p), .. } if p == &path));
    }

    #[test]
    fn test_load_config_from_invalid_file_carries_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "names = 3").unwrap();
        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, Error::Config { path: Some(ref p), .. } if p == &path));
    }

    #[test]
    fn test_discover_config_in_ancestor() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), r#"names = ["Sergio"]"#).unwrap();
        let nested = dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();

        let config = discover_config(nested);
        assert_eq!(config.names(), vec!["Sergio"]);
    }

    #[test]
    fn test_discover_ignores_invalid_config() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "scenarios = [\"nope\"]").unwrap();
        let config = discover_config(dir.path().to_path_buf());
        assert_eq!(config, LambdaGameConfig::default());
    }

    #[test]
    fn test_directory_ancestors_limit() {
        let ancestors: Vec<_> = directory_ancestors(PathBuf::from("/a/b/c/d"), 2).collect();
        assert_eq!(ancestors, vec![PathBuf::from("/a/b/c/d"), PathBuf::from("/a/b/c")]);
    }
}
