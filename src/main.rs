use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};

use reelbase::{AppState, config::Config, db, router, seed, store::MovieStore};

#[derive(Parser, Debug)]
#[command(version, about = "Movie catalog web application")]
struct CliArgs {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Default)]
enum Command {
    /// Run the web server (default).
    #[default]
    Serve,
    /// Replace the catalog with sample movies.
    Seed,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,reelbase=debug,sqlx=warn".to_string()),
        )
        .init();

    let args = CliArgs::parse();
    let config = Arc::new(Config::from_env()?);

    let db = db::connect_and_migrate(&config.database_url)
        .await
        .with_context(|| format!("opening database {}", config.database_url))?;
    let store = MovieStore::new(db);

    match args.command.unwrap_or_default() {
        Command::Serve => serve(config, store).await,
        Command::Seed => {
            seed::populate(&store).await?;
            Ok(())
        },
    }
}

async fn serve(config: Arc<Config>, store: MovieStore) -> anyhow::Result<()> {
    let state = Arc::new(AppState { config: config.clone(), store });
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
