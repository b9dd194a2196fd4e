use crate::models::DbRoom;
use eyre::Result;
use sqlx::PgConnection;
use tracing::info;

pub async fn get_all_rooms(conn: &mut PgConnection) -> Result<Vec<DbRoom>> {
    info!("get_all_rooms: []");

    let rooms = sqlx::query_as::<_, DbRoom>(
        r#"
        SELECT room_id, room_name
        FROM rooms
        ORDER BY room_id
        "#,
    )
    .fetch_all(&mut *conn)
    .await?;

    Ok(rooms)
}

/// Rooms with no meeting on `date` overlapping `[start, end)`, as a single
/// set-difference query.
pub async fn get_available_rooms(
    conn: &mut PgConnection,
    date: &str,
    start: &str,
    end: &str,
) -> Result<Vec<DbRoom>> {
    info!("get_available_rooms: [{}, {}, {}]", date, start, end);

    let rooms = sqlx::query_as::<_, DbRoom>(
        r#"
        SELECT room_id, room_name
        FROM rooms
        WHERE room_id NOT IN (
            SELECT room_id
            FROM meetings
            WHERE mtg_date = $1::date
              AND (start_time, end_time) OVERLAPS ($2::time, $3::time)
        )
        ORDER BY room_id
        "#,
    )
    .bind(date)
    .bind(start)
    .bind(end)
    .fetch_all(&mut *conn)
    .await?;

    Ok(rooms)
}

pub async fn create_room(conn: &mut PgConnection, room_name: &str) -> Result<DbRoom> {
    info!("create_room: [{}]", room_name);

    let room = sqlx::query_as::<_, DbRoom>(
        r#"
        INSERT INTO rooms (room_name)
        VALUES ($1)
        RETURNING room_id, room_name
        "#,
    )
    .bind(room_name)
    .fetch_one(&mut *conn)
    .await?;

    Ok(room)
}

pub async fn count_rooms(conn: &mut PgConnection) -> Result<i64> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM rooms")
        .fetch_one(&mut *conn)
        .await?;

    Ok(count)
}
