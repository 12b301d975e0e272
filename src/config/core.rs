use serde::{Deserialize, Serialize};

use crate::consonants::{default_names, DEFAULT_NAMES, EXPECTED_CONSONANTS};
use crate::io::OutputFormat;

/// Root configuration structure for lambdagame
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LambdaGameConfig {
    /// Names to count consonants in
    #[serde(default)]
    pub names: Option<Vec<String>>,

    /// Scenarios to run, in order
    #[serde(default)]
    pub scenarios: Option<Vec<String>>,

    /// Count every scenario must report
    #[serde(default)]
    pub expected: Option<usize>,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: Option<OutputFormat>,

    /// Disable colored terminal output
    #[serde(default)]
    pub plain: bool,
}

impl LambdaGameConfig {
    /// Configured names, falling back to the built-in list.
    pub fn names(&self) -> Vec<String> {
        self.names.clone().unwrap_or_else(default_names)
    }

    /// Configured scenario selection; empty means every scenario.
    pub fn scenarios(&self) -> Vec<String> {
        self.scenarios.clone().unwrap_or_default()
    }

    pub fn format(&self) -> OutputFormat {
        self.output
            .as_ref()
            .and_then(|output| output.format)
            .unwrap_or_default()
    }

    pub fn plain(&self) -> bool {
        self.output.as_ref().is_some_and(|output| output.plain)
    }

    /// Count to verify `names` against.
    ///
    /// An explicit `expected` always wins. Without one, the built-in names
    /// have a known answer and any other list is only checked for agreement.
    pub fn expected_for(&self, names: &[String]) -> Option<usize> {
        self.expected.or_else(|| {
            let is_default = names.len() == DEFAULT_NAMES.len()
                && names.iter().zip(DEFAULT_NAMES).all(|(a, b)| a == b);
            is_default.then_some(EXPECTED_CONSONANTS)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LambdaGameConfig::default();
        assert_eq!(config.names(), default_names());
        assert!(config.scenarios().is_empty());
        assert_eq!(config.format(), OutputFormat::Terminal);
        assert!(!config.plain());
    }

    #[test]
    fn test_expected_for_default_names() {
        let config = LambdaGameConfig::default();
        assert_eq!(
            config.expected_for(&default_names()),
            Some(EXPECTED_CONSONANTS)
        );
        assert_eq!(config.expected_for(&["Ugo".to_string()]), None);
    }

    #[test]
    fn test_explicit_expected_wins() {
        let config = LambdaGameConfig {
            expected: Some(2),
            ..Default::default()
        };
        assert_eq!(config.expected_for(&default_names()), Some(2));
    }
}
