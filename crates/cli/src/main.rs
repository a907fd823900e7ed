//! Verify SDK command line client.
//!
//! This tool provides commands for:
//! - Requesting a token for a device
//! - Running a verify search (token request followed by a token-scoped search)

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod config;
mod error;
mod verify;

use error::CliError;

#[derive(Parser)]
#[command(name = "verifycli")]
#[command(about = "Verify SDK client for signed token and search requests")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to the TOML configuration file (embedded defaults when omitted)
    #[arg(long, short, global = true, env = "VERIFY_SDK_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Request a token for a device
    Token {
        /// Device identifier
        #[arg(long)]
        device_id: String,

        /// IP address of the end user
        #[arg(long)]
        source_ip: String,
    },

    /// Request a token and run a verify search with it
    Search {
        /// Device identifier
        #[arg(long)]
        device_id: String,

        /// IP address of the end user
        #[arg(long)]
        source_ip: String,

        /// Phone number to search, in international format
        #[arg(long)]
        number: String,

        /// Optional two-letter country code
        #[arg(long)]
        country: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logger(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    let result = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}  {} {}",
                chrono::Local::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
                record.level(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply();

    if let Err(e) = result {
        eprintln!("Failed to initialize logger: {}", e);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let settings = config::load_settings(cli.config.as_deref(), cli.verbose)?;
    let client = settings.to_client()?;

    let output = match cli.command {
        Commands::Token {
            device_id,
            source_ip,
        } => verify::token(&client, &verify::token_params(&device_id, &source_ip))?,
        Commands::Search {
            device_id,
            source_ip,
            number,
            country,
        } => verify::search(
            &client,
            &verify::search_params(&device_id, &source_ip, &number, country.as_deref()),
        )?,
    };

    println!("{}", output);
    Ok(())
}
