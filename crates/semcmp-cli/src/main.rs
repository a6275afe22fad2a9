mod config;

use config::SemcmpConfig;

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::LevelFilter;
use semcmp::{Comparator, ParseOptions, Semver, VersionParser};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "semcmp")]
#[command(about = "Parse semantic versions and order them by precedence")]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Require a full major.minor.patch core
    #[arg(long, global = true, conflicts_with = "loose")]
    strict: bool,

    /// Default missing minor and patch components to zero
    #[arg(long, global = true)]
    loose: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Parse a version and print its components as JSON
    Parse {
        version: String,
    },
    /// Compare two versions, printing -1, 0 or 1
    Cmp {
        version1: String,
        version2: String,
    },
    /// Sort versions by precedence, one per line
    Sort {
        /// Highest precedence first
        #[arg(short, long)]
        reverse: bool,

        #[arg(required = true)]
        versions: Vec<String>,
    },
}

impl Args {
    fn strict_override(&self) -> Option<bool> {
        match (self.strict, self.loose) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

fn init_logger(verbose: u8) {
    let mut builder = env_logger::Builder::from_default_env();
    match verbose {
        0 => {}
        1 => {
            builder.filter_level(LevelFilter::Debug);
        }
        _ => {
            builder.filter_level(LevelFilter::Trace);
        }
    }
    let _ = builder.try_init();
}

fn run() -> Result<i32> {
    let args = Args::parse();
    init_logger(args.verbose);

    let config = SemcmpConfig::load_from_cwd()?.unwrap_or_default();
    let options: ParseOptions = config.parse_options(args.strict_override());
    log::debug!("Using {:?}", options);

    match &args.command {
        Commands::Parse { version } => {
            let parsed = VersionParser::new(options).parse(version)?;
            println!("{}", serde_json::to_string_pretty(&parsed)?);
        }
        Commands::Cmp { version1, version2 } => {
            println!("{}", Comparator::cmp(version1, version2, options)?);
        }
        Commands::Sort { reverse, versions } => {
            let versions: Vec<&str> = versions.iter().map(String::as_str).collect();
            let sorted = if *reverse {
                Semver::rsort(&versions, options)?
            } else {
                Semver::sort(&versions, options)?
            };
            for version in sorted {
                println!("{}", version);
            }
        }
    }

    Ok(0)
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            eprintln!("Error: {}", e);
            for cause in e.chain().skip(1) {
                eprintln!("  Caused by: {}", cause);
            }
            ExitCode::from(1)
        }
    }
}
