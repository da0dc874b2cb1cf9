use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use mediainfo_explorer::catalog::{catalog_directory, print_catalog_report};
use mediainfo_explorer::report::print_media_report;
use mediainfo_explorer::{ensure_file, parse_option, probe_media_file, ExplorerError, Result};
use mediainfo_ffi::{MediaInfo, NativeLibrary};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "mediainfo-explorer",
    version,
    about = "Inspect media metadata and build directory-level summaries using MediaInfo"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Inspect a single media file
    Inspect {
        /// File to inspect
        input: PathBuf,
        /// Print the full parameter snapshot as JSON
        #[arg(long, conflicts_with = "full")]
        json: bool,
        /// Print MediaInfo's own text report
        #[arg(long)]
        full: bool,
        /// MediaInfo option to set before opening, e.g. `Complete=1`
        #[arg(long = "option", value_name = "NAME=VALUE")]
        options: Vec<String>,
    },
    /// Scan a directory and summarize media metadata
    Catalog {
        /// Directory to scan
        dir: PathBuf,
        /// Recurse into subdirectories
        #[arg(long)]
        recursive: bool,
        /// Print structured JSON instead of text output
        #[arg(long)]
        json: bool,
    },
    /// Print library-wide information
    Info {
        #[arg(value_enum, default_value_t = InfoTopic::Version)]
        topic: InfoTopic,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum InfoTopic {
    Version,
    Parameters,
    Codecs,
    Capacities,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    if let Err(error) = run() {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Inspect {
            input,
            json,
            full,
            options,
        } => {
            let mut media = MediaInfo::<NativeLibrary>::new()?;
            for raw in &options {
                let (name, value) = parse_option(raw)?;
                let response = media.option(&name, &value)?;
                debug!(name = %name, value = %value, response = %response, "applied option");
            }

            if full {
                ensure_file(&input)?;
                if !media.open(&input)? {
                    return Err(ExplorerError::Unsupported(input.display().to_string()));
                }
                print!("{}", media.inform()?);
            } else {
                let probe = probe_media_file(&mut media, &input)?;
                if json {
                    println!("{}", serde_json::to_string_pretty(&probe)?);
                } else {
                    print_media_report(&probe.report);
                }
            }

            media.dispose()?;
        }
        Commands::Catalog {
            dir,
            recursive,
            json,
        } => {
            let mut media = MediaInfo::<NativeLibrary>::new()?;
            let report = catalog_directory(&mut media, &dir, recursive)?;
            media.dispose()?;

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_catalog_report(&report);
            }
        }
        Commands::Info { topic } => {
            let text = match topic {
                InfoTopic::Version => MediaInfo::<NativeLibrary>::version()?,
                InfoTopic::Parameters => MediaInfo::<NativeLibrary>::parameters()?,
                InfoTopic::Codecs => MediaInfo::<NativeLibrary>::codecs()?,
                InfoTopic::Capacities => MediaInfo::<NativeLibrary>::capacities()?,
            };
            println!("{}", text.trim_end());
        }
    }

    Ok(())
}
