use crate::errors::Result;
use crate::runner::RunReport;
use clap::ValueEnum;
use colored::*;
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Markdown,
    #[default]
    Terminal,
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &RunReport) -> Result<()>;

    /// Summarize whether the scenarios agree. Formats that carry the full
    /// report already may skip this.
    fn write_summary(&mut self, _report: &RunReport) -> Result<()> {
        Ok(())
    }
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &RunReport) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, report)?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &RunReport) -> Result<()> {
        writeln!(self.writer, "# Consonant Count")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "Names: {}", report.names.join(", "))?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Scenario | Style | Consonants |")?;
        writeln!(self.writer, "|----------|-------|------------|")?;
        for entry in &report.reports {
            writeln!(
                self.writer,
                "| {} | {} | {} |",
                entry.scenario, entry.style, entry.consonants
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_summary(&mut self, report: &RunReport) -> Result<()> {
        match report.consensus() {
            Some(count) => writeln!(
                self.writer,
                "All {} scenarios agree: **{}** consonants",
                report.reports.len(),
                count
            )?,
            None => writeln!(self.writer, "Scenarios **disagree**")?,
        }
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    color: bool,
}

impl TerminalWriter<std::io::Stdout> {
    pub fn new(color: bool) -> Self {
        Self {
            writer: std::io::stdout(),
            color,
        }
    }
}

impl<W: Write> TerminalWriter<W> {
    /// Write uncolored lines to `writer`.
    pub fn plain(writer: W) -> Self {
        Self {
            writer,
            color: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &RunReport) -> Result<()> {
        for entry in &report.reports {
            let line = consonant_line(&entry.scenario, entry.consonants);
            if self.color {
                writeln!(self.writer, "{}", line.bold())?;
            } else {
                writeln!(self.writer, "{line}")?;
            }
        }
        Ok(())
    }

    fn write_summary(&mut self, report: &RunReport) -> Result<()> {
        let (symbol, message) = match report.consensus() {
            Some(count) => (
                "✓",
                format!(
                    "all {} scenarios agree on {} consonants",
                    report.reports.len(),
                    count
                ),
            ),
            None => ("✗", "scenarios disagree".to_string()),
        };

        let symbol = match (self.color, report.consensus().is_some()) {
            (false, _) => symbol.normal(),
            (true, true) => symbol.green(),
            (true, false) => symbol.red(),
        };
        writeln!(self.writer, "{symbol} {message}")?;
        Ok(())
    }
}

/// `"<scenario>: there are <n> consonants"`
pub fn consonant_line(scenario: &str, consonants: usize) -> String {
    format!("{scenario}: there are {consonants} consonants")
}

pub fn create_writer(format: OutputFormat, color: bool) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(std::io::stdout())),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(std::io::stdout())),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(color)),
    }
}
