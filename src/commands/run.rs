use super::load_file_config;
use crate::cli::{use_color, CommonArgs};
use crate::io::{create_writer, OutputFormat};
use crate::runner::{self, RunReport};
use anyhow::Result;

#[derive(Debug, Clone, Default)]
pub struct RunConfig {
    pub scenarios: Vec<String>,
    pub format: Option<OutputFormat>,
    pub common: CommonArgs,
}

/// Resolve settings (flags over config file over defaults) and run.
pub fn execute_run(config: &RunConfig) -> Result<(RunReport, OutputFormat, bool)> {
    let file_config = load_file_config(config.common.config.as_deref())?;

    let names = config
        .common
        .names
        .clone()
        .unwrap_or_else(|| file_config.names());
    let selection = if config.scenarios.is_empty() {
        file_config.scenarios()
    } else {
        config.scenarios.clone()
    };
    let format = config.format.unwrap_or_else(|| file_config.format());
    let plain = config.common.plain || file_config.plain();

    let report = runner::run_selected(&selection, &names)?;
    Ok((report, format, plain))
}

pub fn handle_run(config: RunConfig) -> Result<()> {
    let (report, format, plain) = execute_run(&config)?;
    let mut writer = create_writer(format, use_color(plain));
    writer.write_report(&report)?;
    Ok(())
}
