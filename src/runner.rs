//! Runs scenarios over a list of names and checks that they agree.

use crate::errors::{Error, Result};
use crate::scenarios::{self, Scenario, Style};
use serde::{Deserialize, Serialize};

/// Consonant count produced by one scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioReport {
    pub scenario: String,
    pub style: Style,
    pub consonants: usize,
}

/// Outcome of running a set of scenarios over the same names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    pub names: Vec<String>,
    pub reports: Vec<ScenarioReport>,
    /// The shared count when every scenario agrees, `None` otherwise.
    pub consensus: Option<usize>,
}

impl RunReport {
    pub fn new(names: Vec<String>, reports: Vec<ScenarioReport>) -> Self {
        let consensus = agreed_count(&reports);
        Self {
            names,
            reports,
            consensus,
        }
    }

    /// The shared count when every scenario agrees.
    pub fn consensus(&self) -> Option<usize> {
        self.consensus
    }

    /// Check every report against `expected`, or against the first report
    /// when no expectation is given. Returns the verified count.
    pub fn verify(&self, expected: Option<usize>) -> Result<usize> {
        let Some(first) = self.reports.first() else {
            return Ok(expected.unwrap_or_default());
        };
        let expected = expected.unwrap_or(first.consonants);

        match self
            .reports
            .iter()
            .find(|report| report.consonants != expected)
        {
            Some(report) => Err(Error::Disagreement {
                scenario: report.scenario.clone(),
                expected,
                actual: report.consonants,
            }),
            None => Ok(expected),
        }
    }
}

fn agreed_count(reports: &[ScenarioReport]) -> Option<usize> {
    let first = reports.first()?.consonants;
    reports
        .iter()
        .all(|report| report.consonants == first)
        .then_some(first)
}

/// Run `scenarios` in order. The first failing scenario aborts the run.
pub fn run_scenarios(scenarios: &[&Scenario], names: &[String]) -> Result<RunReport> {
    log::info!(
        "Running {} scenario(s) over {} name(s)",
        scenarios.len(),
        names.len()
    );

    let reports = scenarios
        .iter()
        .map(|scenario| {
            let consonants = scenario.run(names).inspect_err(|e| {
                log::warn!("Scenario '{}' failed: {}", scenario.name, e);
            })?;
            Ok(ScenarioReport {
                scenario: scenario.name.to_string(),
                style: scenario.style,
                consonants,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(RunReport::new(names.to_vec(), reports))
}

/// Run the scenarios named in `selection` (all of them when empty).
pub fn run_selected<S: AsRef<str>>(selection: &[S], names: &[String]) -> Result<RunReport> {
    let scenarios = scenarios::select(selection)?;
    run_scenarios(&scenarios, names)
}
