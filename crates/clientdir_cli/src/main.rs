//! Operator CLI for the client directory.
//!
//! # Responsibility
//! - Seed a database with sample clients.
//! - Run lookups from the shell and print the JSON envelope.

use clap::{Parser, Subcommand};
use clientdir_core::db::open_db;
use clientdir_core::{
    core_version, effective_log_level, init_logging, ClientSeeder, FakeClientGenerator,
    LookupService, SqliteClientRepository, DEFAULT_SEED_COUNT,
};
use log::info;
use std::error::Error;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about = "Client directory maintenance commands")]
struct Cli {
    /// SQLite database file; created and migrated when missing
    #[arg(long, global = true, env = "CLIENTDIR_DB", default_value = "clientdir.sqlite3")]
    db: PathBuf,

    /// trace|debug|info|warn|error
    #[arg(long, global = true, env = "CLIENTDIR_LOG_LEVEL")]
    log_level: Option<String>,

    /// Absolute directory for rotating log files; logs go to stderr when unset
    #[arg(long, global = true, env = "CLIENTDIR_LOG_DIR")]
    log_dir: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Insert generated sample clients
    Seed {
        #[arg(long, default_value_t = DEFAULT_SEED_COUNT)]
        count: usize,
        /// Fixed RNG seed for reproducible data
        #[arg(long)]
        rng_seed: Option<u64>,
    },
    /// Print clients whose name starts with a letter
    Lookup {
        /// Defaults to "A" when omitted or empty
        #[arg(long)]
        letter: Option<String>,
    },
    /// Print the core crate version
    Version,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if let Command::Version = cli.command {
        println!("clientdir_core version={}", core_version());
        return Ok(());
    }

    let level = effective_log_level(cli.log_level.as_deref());
    init_logging(level, cli.log_dir.as_deref())?;

    let conn = open_db(&cli.db)?;
    let repo = SqliteClientRepository::try_new(&conn)?;

    match cli.command {
        Command::Seed { count, rng_seed } => {
            let generator = match rng_seed {
                Some(seed) => FakeClientGenerator::from_seed(seed),
                None => FakeClientGenerator::from_entropy(),
            };
            let ids = ClientSeeder::new(repo, generator).run(count)?;
            info!("event=cli_seed module=cli status=ok inserted={}", ids.len());
            println!("seeded {} clients into {}", ids.len(), cli.db.display());
        }
        Command::Lookup { letter } => {
            let response = LookupService::new(repo).lookup(letter.as_deref())?;
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        Command::Version => {}
    }

    Ok(())
}
