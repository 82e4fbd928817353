use clap::{Parser, Subcommand};
use logpulse_core::cli::analyze::{AnalyzeArgs, run_analyze};
use logpulse_core::cli::conf::{ConfigCmd, run as run_conf};
use logpulse_core::cli::{error_hint, exit_code};
use logpulse_core::logging::init_logging;

#[derive(Parser, Debug)]
#[command(
    name = "logpulse",
    version,
    about = "logpulse: log level counts and health verdicts for plain-text logs"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze a log file (default)
    Analyze(AnalyzeArgs),

    /// Configuration tooling
    Conf {
        #[command(subcommand)]
        cmd: ConfigCmd,
    },
}

fn main() {
    let cli = Cli::parse();

    init_logging();

    let result = match cli.command {
        Some(Command::Analyze(args)) => run_analyze(args),
        Some(Command::Conf { cmd }) => run_conf(cmd),
        None => run_analyze(AnalyzeArgs::default()),
    };

    if let Err(e) = result {
        tracing::warn!(error = %e, "command failed");

        eprintln!("error: {e:#}");
        if let Some(hint) = error_hint(&e) {
            eprintln!();
            eprintln!("{hint}");
        }
        std::process::exit(exit_code(&e));
    }
}
