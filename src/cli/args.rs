use crate::io::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "lambdagame")]
#[command(
    about = "Count consonants with loops, closures, function objects and a hand-rolled pipeline",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Runs every scenario when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run scenarios and print how many consonants each one counts
    Run {
        /// Scenario to run (repeatable, defaults to every scenario)
        #[arg(short, long = "scenario")]
        scenarios: Vec<String>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        #[command(flatten)]
        common: CommonArgs,
    },

    /// List the available scenarios
    List,

    /// Run every scenario and fail unless they all report the same count
    Verify {
        /// Count every scenario must report (defaults to the known answer
        /// for the built-in names)
        #[arg(long)]
        expected: Option<usize>,

        #[command(flatten)]
        common: CommonArgs,
    },

    /// Write a default .lambdagame.toml in the current directory
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Args, Debug, Default, Clone)]
pub struct CommonArgs {
    /// Names to count consonants in (comma separated)
    #[arg(long, value_delimiter = ',')]
    pub names: Option<Vec<String>>,

    /// Configuration file (defaults to the nearest .lambdagame.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub plain: bool,

    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}

impl Commands {
    /// Verbosity requested by the command, if it takes one.
    pub fn verbosity(&self) -> u8 {
        match self {
            Self::Run { common, .. } | Self::Verify { common, .. } => common.verbosity,
            Self::List | Self::Init { .. } => 0,
        }
    }
}

/// Parse CLI arguments using Clap
pub fn parse_args() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_run() {
        let cli = Cli::try_parse_from([
            "lambdagame",
            "run",
            "-s",
            "pipeline",
            "--scenario",
            "closures",
            "--names",
            "Ugo,Anna",
            "--format",
            "json",
            "-vv",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Run {
                scenarios,
                format,
                common,
            }) => {
                assert_eq!(scenarios, vec!["pipeline", "closures"]);
                assert_eq!(format, Some(OutputFormat::Json));
                assert_eq!(common.names, Some(vec!["Ugo".into(), "Anna".into()]));
                assert_eq!(common.verbosity, 2);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::try_parse_from(["lambdagame"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_parse_verify() {
        let cli = Cli::try_parse_from(["lambdagame", "verify", "--expected", "20", "--plain"])
            .unwrap();
        let command = cli.command.unwrap();
        assert_eq!(command.verbosity(), 0);
        match command {
            Commands::Verify { expected, common } => {
                assert_eq!(expected, Some(20));
                assert!(common.plain);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
