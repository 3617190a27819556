//! HTTP server command
//!
//! Runs the clinic query API until Ctrl+C or SIGTERM.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use anyhow::{Context, Result};
use clap::Parser;

use clinic_server::db::connect_or_lazy;
use clinic_server::{run_server, AppState, ServerConfig};

use crate::config::DbArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub bind: IpAddr,

    /// Port to listen on
    #[arg(long, short = 'p', env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    #[command(flatten)]
    pub db: DbArgs,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let db_config = args.db.resolve()?;
    tracing::debug!(?db_config, "Resolved database configuration");

    // A failed first connection is logged inside and does not stop startup
    let pool = connect_or_lazy(&db_config, args.db.pool_settings()).await;

    let config = ServerConfig {
        bind_addr: SocketAddr::new(args.bind, args.port),
        cors_permissive: args.cors_permissive,
    };

    tracing::info!("Starting clinic server on http://{}", config.bind_addr);

    // Run server (blocks until shutdown)
    run_server(AppState::from_pool(pool), config)
        .await
        .context("Server error")?;

    Ok(())
}
