// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod consonants;
pub mod errors;
pub mod io;
pub mod pipeline;
pub mod runner;
pub mod scenarios;

// Re-export commonly used types
pub use crate::errors::{Error, Result};

pub use crate::pipeline::{BinaryOperator, Function, Named, Optional, Pipeline};

pub use crate::consonants::{devowelize, DEFAULT_NAMES, EXPECTED_CONSONANTS};

pub use crate::runner::{run_scenarios, run_selected, RunReport, ScenarioReport};

pub use crate::scenarios::{Scenario, Style};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
