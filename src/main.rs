//! artist-registry binary - HTTP CRUD service for artist records

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info};

use artist_registry::{build_router, db, AppState};

#[derive(Parser, Debug)]
#[command(name = "artist-registry", version, about)]
struct Args {
    /// Path to the SQLite database file (created on first run)
    #[arg(long, env = "ARTIST_REGISTRY_DB", default_value = "comic_artist.db")]
    database: PathBuf,

    /// Address to listen on
    #[arg(long, env = "ARTIST_REGISTRY_BIND", default_value = "127.0.0.1:5000")]
    bind: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("Starting artist-registry v{}", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();

    let pool = match db::connect(&args.database).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("Failed to open database: {e}");
            return Err(e);
        }
    };

    // Table creation failure is logged, not fatal
    db::ensure_schema(&pool).await;

    let state = AppState::new(pool);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&args.bind).await?;
    info!("artist-registry listening on http://{}", args.bind);

    axum::serve(listener, app).await?;

    Ok(())
}
