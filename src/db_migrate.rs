use color_eyre::eyre::Result;
use dotenv::dotenv;
use roombooker_api::config::ApiConfig;
use roombooker_db::schema::{initialize_database, seed_rooms};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    let config = ApiConfig::from_env()?;
    roombooker_api::init_tracing(config.log_level)?;

    info!("Connecting to database...");
    let db_pool = roombooker_db::create_pool(&config.database_url, config.max_connections).await?;

    initialize_database(&db_pool).await?;

    // Optional comma-separated list of room names, e.g. SEED_ROOMS="Everest,Kilimanjaro"
    let room_names: Vec<String> = std::env::var("SEED_ROOMS")
        .unwrap_or_default()
        .split(',')
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .collect();

    if !room_names.is_empty() {
        let seeded = seed_rooms(&db_pool, &room_names).await?;
        info!("Seeded {} room(s).", seeded);
    }

    Ok(())
}
