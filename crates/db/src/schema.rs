use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

use crate::repositories::room;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create rooms table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS rooms (
            room_id SERIAL PRIMARY KEY,
            room_name TEXT NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create meetings table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS meetings (
            mtg_id SERIAL PRIMARY KEY,
            room_id INTEGER NOT NULL REFERENCES rooms(room_id) ON DELETE CASCADE,
            host_name TEXT NULL,
            mtg_name TEXT NOT NULL,
            mtg_date DATE NOT NULL,
            start_time TIME NOT NULL,
            end_time TIME NOT NULL,
            CONSTRAINT valid_time_range CHECK (end_time > start_time)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Overlap lookups always filter on room and date
    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_meetings_room_id_mtg_date ON meetings(room_id, mtg_date);",
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_meetings_mtg_date ON meetings(mtg_date);")
        .execute(pool)
        .await?;

    info!("Database schema initialized successfully.");
    Ok(())
}

/// Inserts the given rooms if the table is empty. Returns how many were added.
pub async fn seed_rooms(pool: &Pool<Postgres>, room_names: &[String]) -> Result<usize> {
    let mut conn = pool.acquire().await?;

    if room::count_rooms(&mut conn).await? > 0 {
        info!("Rooms already present, skipping seed.");
        return Ok(0);
    }

    for name in room_names {
        let created = room::create_room(&mut conn, name).await?;
        info!("Seeded room {} ({})", created.room_id, created.room_name);
    }

    Ok(room_names.len())
}
