use dictionary::config::Config;
use dictionary::gateway::AppServer;
use dictionary::repository::{ensure_items_table, PgItemRepository};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("dictionary=info".parse()?))
        .init();

    let config_path =
        std::env::var("DICTIONARY_CONFIG").unwrap_or_else(|_| "config.yml".into());
    let config = Config::load(&config_path)?;

    let pool = PgPoolOptions::new()
        .max_connections(config.db.max_connections)
        .connect(&config.db.dsn())
        .await?;
    ensure_items_table(&pool).await?;

    let repo = Arc::new(PgItemRepository::new(pool));
    let server = AppServer::new(&config.http.listen_addr, repo);
    server.run().await?;
    Ok(())
}
