pub mod commands;
pub mod logging;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "hunter",
    about = "Discount hunter classifier",
    long_about = "Score a customer's order and cart history and classify whether they are a discount hunter.",
    after_help = "Examples:\n  hunter classify orders.json\n  hunter classify history.jsonl --threshold 0.6 --pretty\n  hunter config"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Score a JSON array or JSON Lines file of activity records")]
    Classify {
        #[arg(help = "Path to the customer's activity records")]
        input: PathBuf,
        #[arg(long, help = "Config file to load instead of hunter.toml")]
        config: Option<PathBuf>,
        #[arg(long, help = "Override the classification threshold")]
        threshold: Option<f64>,
        #[arg(long, help = "Pretty-print the JSON result")]
        pretty: bool,
    },
    #[command(about = "Inspect effective scoring configuration with source attribution")]
    Config {
        #[arg(long, help = "Config file to load instead of hunter.toml")]
        config: Option<PathBuf>,
    },
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Classify { input, config, threshold, pretty } => {
            commands::classify::run(commands::classify::ClassifyArgs {
                input,
                config_path: config,
                threshold,
                pretty,
            })
        }
        Command::Config { config } => commands::CommandResult {
            exit_code: 0,
            output: commands::config::run(config.as_deref()),
        },
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}
