use super::load_file_config;
use crate::cli::{use_color, CommonArgs};
use crate::io::{create_writer, OutputFormat};
use crate::runner::{self, RunReport};
use anyhow::Result;

#[derive(Debug, Clone, Default)]
pub struct VerifyConfig {
    pub expected: Option<usize>,
    pub common: CommonArgs,
}

/// Outcome of a verification run, kept separate from the report so callers
/// can print the counts before failing.
pub struct Verification {
    pub report: RunReport,
    pub outcome: crate::Result<usize>,
    pub format: OutputFormat,
    pub plain: bool,
}

/// Run every scenario and check the counts.
pub fn execute_verify(config: &VerifyConfig) -> Result<Verification> {
    let file_config = load_file_config(config.common.config.as_deref())?;

    let names = config
        .common
        .names
        .clone()
        .unwrap_or_else(|| file_config.names());
    let expected = config
        .expected
        .or_else(|| file_config.expected_for(&names));

    let report = runner::run_selected::<&str>(&[], &names)?;
    let outcome = report.verify(expected);
    Ok(Verification {
        report,
        outcome,
        format: file_config.format(),
        plain: config.common.plain || file_config.plain(),
    })
}

pub fn handle_verify(config: VerifyConfig) -> Result<()> {
    let verification = execute_verify(&config)?;
    let report = &verification.report;

    let mut writer = create_writer(verification.format, use_color(verification.plain));
    writer.write_report(report)?;
    writer.write_summary(report)?;

    let count = verification.outcome?;
    log::info!(
        "Verified {} scenarios at {} consonants",
        report.reports.len(),
        count
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consonants::EXPECTED_CONSONANTS;
    use crate::errors::Error;

    #[test]
    fn test_verify_default_names() {
        let config = VerifyConfig {
            common: CommonArgs {
                names: Some(crate::consonants::default_names()),
                ..Default::default()
            },
            ..Default::default()
        };
        let verification = execute_verify(&config).unwrap();
        assert_eq!(verification.outcome.unwrap(), EXPECTED_CONSONANTS);
        assert_eq!(verification.report.consensus(), Some(EXPECTED_CONSONANTS));
    }

    #[test]
    fn test_verify_wrong_expectation() {
        let config = VerifyConfig {
            expected: Some(21),
            common: CommonArgs {
                names: Some(crate::consonants::default_names()),
                ..Default::default()
            },
        };
        let verification = execute_verify(&config).unwrap();
        assert!(matches!(
            verification.outcome,
            Err(Error::Disagreement {
                expected: 21,
                actual: 20,
                ..
            })
        ));
    }

    #[test]
    fn test_verify_custom_names_checks_agreement_only() {
        let config = VerifyConfig {
            common: CommonArgs {
                names: Some(vec!["Ugo".to_string()]),
                ..Default::default()
            },
            ..Default::default()
        };
        let verification = execute_verify(&config).unwrap();
        assert_eq!(verification.outcome.unwrap(), 2);
    }

    #[test]
    fn test_verify_empty_names_fails() {
        let config = VerifyConfig {
            common: CommonArgs {
                names: Some(Vec::new()),
                ..Default::default()
            },
            ..Default::default()
        };
        let err = execute_verify(&config).err().unwrap();
        assert!(err.to_string().contains("empty optional"));
    }
}
