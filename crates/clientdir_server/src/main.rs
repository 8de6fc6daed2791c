//! Client directory HTTP server entry point.

use actix_web::middleware::{self, Condition};
use actix_web::{web, App, HttpServer};
use clap::Parser;
use clientdir_core::db::open_db;
use clientdir_core::{
    effective_log_level, init_logging, FakeClientGenerator, DEFAULT_SEED_COUNT,
};
use clientdir_server::shell::DEFAULT_APP_NAME;
use clientdir_server::{configure, AppState, ShellConfig};
use log::info;
use std::io;
use std::path::PathBuf;

/// Client directory server: looks up clients by starting letter over HTTP
#[derive(Parser, Debug)]
#[command(version)]
struct Cli {
    /// SQLite database file; created and migrated when missing
    #[arg(long, env = "CLIENTDIR_DB", default_value = "clientdir.sqlite3")]
    db: PathBuf,

    /// Address the server binds to
    #[arg(short, long, env = "CLIENTDIR_ADDRESS", default_value = "127.0.0.1")]
    address: String,

    /// Port the server listens on
    #[arg(short, long, env = "CLIENTDIR_PORT", default_value_t = 8000)]
    port: u16,

    /// trace|debug|info|warn|error; defaults to debug in debug builds, info otherwise
    #[arg(long, env = "CLIENTDIR_LOG_LEVEL")]
    log_level: Option<String>,

    /// Absolute directory for rotating log files; logs go to stderr when unset
    #[arg(long, env = "CLIENTDIR_LOG_DIR")]
    log_dir: Option<String>,

    #[arg(long, env = "CLIENTDIR_HTTP_WORKERS", default_value_t = 2)]
    http_workers: usize,

    /// Log every HTTP request
    #[arg(long)]
    log_http: bool,

    /// Insert sample clients before serving when the store is empty
    #[arg(long)]
    seed_on_start: bool,

    /// Name appended to page titles
    #[arg(long, env = "CLIENTDIR_APP_NAME", default_value = DEFAULT_APP_NAME)]
    app_name: String,
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    let args = Cli::parse();

    let level = effective_log_level(args.log_level.as_deref());
    init_logging(level, args.log_dir.as_deref()).map_err(io::Error::other)?;

    let conn = open_db(&args.db).map_err(io::Error::other)?;
    let state = web::Data::new(AppState::new(conn));

    if args.seed_on_start {
        let inserted = state
            .seed_if_empty(DEFAULT_SEED_COUNT, FakeClientGenerator::from_entropy())
            .map_err(io::Error::other)?;
        info!("event=seed_on_start module=server status=ok inserted={inserted}");
    }

    let shell = web::Data::new(ShellConfig {
        app_name: args.app_name,
    });
    let log_http = args.log_http;

    info!(
        "event=server_start module=server status=ok address={} port={} workers={}",
        args.address, args.port, args.http_workers
    );

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(shell.clone())
            .configure(configure)
            .wrap(Condition::new(log_http, middleware::Logger::default()))
    })
    .workers(args.http_workers)
    .bind((args.address, args.port))?
    .run()
    .await
}
