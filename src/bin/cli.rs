//! logkv CLI
//!
//! Command-line interface for a local logkv store.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use logkv::{Config, Db, LogKvError, StrategyKind};
use tracing_subscriber::{fmt, EnvFilter};

/// logkv CLI
#[derive(Parser, Debug)]
#[command(name = "logkv")]
#[command(about = "Single-file append-only key-value store")]
#[command(version)]
struct Args {
    /// Log file
    #[arg(short, long, default_value = "simple.db")]
    file: PathBuf,

    /// Index snapshot file (defaults to <file>.index.json)
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// Storage strategy
    #[arg(short, long, value_enum, default_value_t = StrategyKind::IndexedFile)]
    strategy: StrategyKind,

    /// Log debug output to stderr
    #[arg(long)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Get value for key
    Get {
        /// The key to get
        key: String,
    },

    /// Set value for key
    Put {
        /// The key to set
        key: String,

        /// The value to set
        value: String,
    },
}

fn main() {
    let args = Args::parse();

    // RUST_LOG wins over --debug
    let default_filter = if args.debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let mut builder = Config::builder()
        .log_path(&args.file)
        .strategy(args.strategy);
    if let Some(snapshot) = &args.snapshot {
        builder = builder.snapshot_path(snapshot);
    }
    let config = builder.build();

    let mut db = match Db::open(config) {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("Failed to open store: {}", e);
            process::exit(2);
        }
    };

    let result = match &args.command {
        Commands::Get { key } => db.get(key).map(|value| println!("{}", value)),
        Commands::Put { key, value } => {
            tracing::debug!(key = %key, value = %value, "put requested");
            db.put(key, value)
        }
    };

    let closed = db.close();
    let result = result.and(closed);

    match result {
        Ok(()) => {}
        Err(LogKvError::KeyNotFound) => {
            if let Commands::Get { key } = &args.command {
                eprintln!("key not found: {}", key);
            }
            process::exit(1);
        }
        Err(e) => {
            tracing::error!("{}", e);
            process::exit(2);
        }
    }
}
