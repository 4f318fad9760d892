use bouncedb_mysql::{Config, MySqlStorage, SessionStorage};
use mimalloc::MiMalloc;
use sqlx::mysql::MySqlPoolOptions;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = Config::load()?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        user_table = %cfg.user_table,
        session_table = %cfg.session_table,
        email_unique = cfg.email_unique,
        max_connections = cfg.max_connections,
        loglevel = %cfg.loglevel
    );

    let pool = MySqlPoolOptions::new()
        .max_connections(cfg.max_connections)
        .connect(&cfg.database_url)
        .await?;

    let storage = MySqlStorage::from_pool(pool.clone(), Some(&cfg.replace_mapping()))?;
    storage.init().await?;

    let removed = storage.clean_up(chrono::Utc::now()).await?;
    info!(removed, "startup session cleanup finished");

    pool.close().await;
    Ok(())
}
