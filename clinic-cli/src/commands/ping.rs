//! Store connectivity check

use anyhow::{Context, Result};
use clap::Parser;

use clinic_server::db::{create_pool_with_options, ping};

use crate::config::DbArgs;

/// Arguments for the ping command
#[derive(Parser, Debug)]
pub struct PingArgs {
    #[command(flatten)]
    pub db: DbArgs,
}

/// Connect once and run `SELECT 1`
pub async fn run_ping(args: PingArgs) -> Result<()> {
    let db_config = args.db.resolve()?;

    let pool = create_pool_with_options(&db_config, args.db.pool_settings())
        .await
        .with_context(|| {
            format!(
                "Database connection failed ({}:{}/{})",
                db_config.host, db_config.port, db_config.database
            )
        })?;

    ping(&pool).await.context("Ping query failed")?;
    pool.close().await;

    println!(
        "ok: {}@{}:{}/{}",
        db_config.user, db_config.host, db_config.port, db_config.database
    );
    Ok(())
}
