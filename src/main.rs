//! User CRUD service binary.
//!
//! Serves an in-memory `/users` resource over HTTP:
//!   GET  /users        — list all users
//!   GET  /users/{id}   — fetch one user
//!   POST /users        — create a user
//!
//! Usage:
//!   user-service --port 3000
//!
//! State is process-local; restarting the service resets it to the seed data.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;
use user_service::{build_router, UserStore};

#[derive(Parser, Debug)]
#[command(name = "user-service")]
#[command(about = "In-memory user CRUD service")]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "3000")]
    port: u16,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .compact()
        .init();

    let store = UserStore::new();
    let app = build_router(store);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", args.port))
        .await
        .with_context(|| format!("Failed to bind port {}", args.port))?;
    info!("user-service listening on port {}", args.port);

    axum::serve(listener, app)
        .await
        .context("HTTP server failed")?;
    Ok(())
}
