use anyhow::Result;
use lambdagame::cli::{self, Commands};
use lambdagame::commands::{self, RunConfig, VerifyConfig};

// Main orchestrator function
fn main() -> Result<()> {
    let cli = cli::parse_args();

    let verbosity = cli.command.as_ref().map_or(0, Commands::verbosity);
    cli::init_logging(verbosity);

    match cli.command {
        Some(Commands::Run {
            scenarios,
            format,
            common,
        }) => commands::handle_run(RunConfig {
            scenarios,
            format,
            common,
        }),
        Some(Commands::List) => {
            let mut stdout = std::io::stdout().lock();
            commands::list_scenarios(&mut stdout, cli::use_color(false))
        }
        Some(Commands::Verify { expected, common }) => {
            commands::handle_verify(VerifyConfig { expected, common })
        }
        Some(Commands::Init { force }) => commands::init_config(force),
        // No subcommand: run everything with defaults
        None => commands::handle_run(RunConfig::default()),
    }
}
