//! CLI Adapter.

mod list;
mod logging;
mod new;
mod verify;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "sewapay-scaffold")]
#[command(version)]
#[command(
    about = "Materialize the SewaPay fintech Next.js project scaffold",
    long_about = None
)]
struct Cli {
    /// Enable debug logging on stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the project directory and install its dependencies
    #[clap(visible_alias = "n")]
    New {
        /// Directory to create (defaults to sewapay-fintech)
        target_dir: Option<PathBuf>,
        /// Do not run the dependency installer
        #[arg(long)]
        skip_install: bool,
        /// Write into a staging directory and rename it into place when complete
        #[arg(long)]
        staged: bool,
        /// Read defaults from a scaffold.toml file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// List the files the scaffold will create
    #[clap(visible_alias = "ls")]
    List {
        /// Show size and SHA-256 for each file
        #[arg(short, long)]
        long: bool,
        /// Output format
        #[arg(long, value_enum, default_value_t = list::OutputFormat::Text)]
        format: list::OutputFormat,
    },
    /// Compare an existing project directory with the scaffold
    #[clap(visible_alias = "v")]
    Verify {
        /// Directory to check (defaults to sewapay-fintech)
        target_dir: Option<PathBuf>,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let command = cli.command.unwrap_or(Commands::New {
        target_dir: None,
        skip_install: false,
        staged: false,
        config: None,
    });

    let result: Result<i32, AppError> = match command {
        Commands::New { target_dir, skip_install, staged, config } => {
            new::run_new(target_dir, skip_install, staged, config).map(|_| 0)
        }
        Commands::List { long, format } => list::run_list(long, format).map(|_| 0),
        Commands::Verify { target_dir } => verify::run_verify(target_dir),
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
