use clap::{Parser, Subcommand};
use fleetlog_cli::{commands, logging};
use fleetlog_core::{AppConfig, AppConfigExt};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(version, about = "Damage and repair statistics from game combat logs")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze one log file
    Analyze {
        #[arg(short, long)]
        path: PathBuf,
        /// Print the full analysis as JSON
        #[arg(long)]
        json: bool,
    },
    /// Analyze the newest log in the configured directory
    Latest {
        #[arg(long)]
        json: bool,
    },
    ListFiles,
    Config,
    SetDirectory {
        #[arg(short, long)]
        path: String,
    },
}

fn main() -> ExitCode {
    logging::init();

    let cli = Cli::parse();
    let mut config = AppConfig::load();

    let result = match cli.command {
        Commands::Analyze { path, json } => commands::analyze_file(&path, &config, json),
        Commands::Latest { json } => commands::analyze_latest(&config, json),
        Commands::ListFiles => commands::list_files(&config),
        Commands::Config => commands::show_settings(&config),
        Commands::SetDirectory { path } => commands::set_directory(path, &mut config),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
