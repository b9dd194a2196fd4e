use crate::models::DbMeeting;
use eyre::Result;
use roombooker_core::models::meeting::NewMeeting;
use sqlx::{Connection, PgConnection};
use tracing::{debug, info};

pub async fn get_meeting_by_id(conn: &mut PgConnection, mtg_id: i32) -> Result<Option<DbMeeting>> {
    info!("get_meeting_by_id: [{}]", mtg_id);

    let meeting = sqlx::query_as::<_, DbMeeting>(
        r#"
        SELECT mtg_id, room_id, host_name, mtg_name, mtg_date, start_time, end_time
        FROM meetings
        WHERE mtg_id = $1
        "#,
    )
    .bind(mtg_id)
    .fetch_optional(&mut *conn)
    .await?;

    Ok(meeting)
}

/// Meetings in `room_id` on `date` overlapping `[start, end)`. `OVERLAPS`
/// treats the intervals as half-open, so back-to-back meetings do not clash.
pub async fn get_conflicting_meetings(
    conn: &mut PgConnection,
    room_id: i32,
    date: &str,
    start: &str,
    end: &str,
) -> Result<Vec<DbMeeting>> {
    info!("get_conflicting_meetings: [{}, {}, {}, {}]", room_id, date, start, end);

    let meetings = sqlx::query_as::<_, DbMeeting>(
        r#"
        SELECT mtg_id, room_id, host_name, mtg_name, mtg_date, start_time, end_time
        FROM meetings
        WHERE room_id = $1
          AND mtg_date = $2::date
          AND (start_time, end_time) OVERLAPS ($3::time, $4::time)
        "#,
    )
    .bind(room_id)
    .bind(date)
    .bind(start)
    .bind(end)
    .fetch_all(&mut *conn)
    .await?;

    Ok(meetings)
}

pub async fn get_meetings_by_room_id(
    conn: &mut PgConnection,
    room_id: i32,
) -> Result<Vec<DbMeeting>> {
    info!("get_meetings_by_room_id: [{}]", room_id);

    let meetings = sqlx::query_as::<_, DbMeeting>(
        r#"
        SELECT mtg_id, room_id, host_name, mtg_name, mtg_date, start_time, end_time
        FROM meetings
        WHERE room_id = $1
        ORDER BY mtg_date ASC, start_time ASC
        "#,
    )
    .bind(room_id)
    .fetch_all(&mut *conn)
    .await?;

    Ok(meetings)
}

pub async fn get_all_meetings(conn: &mut PgConnection) -> Result<Vec<DbMeeting>> {
    info!("get_all_meetings: []");

    let meetings = sqlx::query_as::<_, DbMeeting>(
        r#"
        SELECT mtg_id, room_id, host_name, mtg_name, mtg_date, start_time, end_time
        FROM meetings
        ORDER BY mtg_date ASC, start_time ASC, mtg_id ASC
        "#,
    )
    .fetch_all(&mut *conn)
    .await?;

    Ok(meetings)
}

/// Inserts a meeting unless its slot is already taken.
///
/// The overlap check and the insert share a transaction holding an advisory
/// lock on the room, so two requests for the same slot cannot both insert.
/// Returns `None` when the slot is taken.
pub async fn create_meeting(
    conn: &mut PgConnection,
    meeting: &NewMeeting,
) -> Result<Option<DbMeeting>> {
    info!(
        "create_meeting: [{}, {:?}, {}, {}, {}, {}]",
        meeting.room_id,
        meeting.host_name,
        meeting.mtg_name,
        meeting.mtg_date,
        meeting.start_time,
        meeting.end_time
    );

    let mut tx = conn.begin().await?;

    sqlx::query("SELECT pg_advisory_xact_lock($1)")
        .bind(i64::from(meeting.room_id))
        .execute(&mut *tx)
        .await?;

    let conflicts = get_conflicting_meetings(
        &mut *tx,
        meeting.room_id,
        &meeting.mtg_date,
        &meeting.start_time,
        &meeting.end_time,
    )
    .await?;

    if !conflicts.is_empty() {
        debug!("Slot taken before insert for room {}", meeting.room_id);
        tx.rollback().await?;
        return Ok(None);
    }

    let created = sqlx::query_as::<_, DbMeeting>(
        r#"
        INSERT INTO meetings (room_id, host_name, mtg_name, mtg_date, start_time, end_time)
        VALUES ($1, $2, $3, $4::date, $5::time, $6::time)
        RETURNING mtg_id, room_id, host_name, mtg_name, mtg_date, start_time, end_time
        "#,
    )
    .bind(meeting.room_id)
    .bind(meeting.host_name.as_deref())
    .bind(&meeting.mtg_name)
    .bind(&meeting.mtg_date)
    .bind(&meeting.start_time)
    .bind(&meeting.end_time)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(Some(created))
}

/// Returns the number of rows deleted.
pub async fn delete_meeting(conn: &mut PgConnection, mtg_id: i32) -> Result<u64> {
    info!("delete_meeting: [{}]", mtg_id);

    let result = sqlx::query(
        r#"
        DELETE FROM meetings
        WHERE mtg_id = $1
        "#,
    )
    .bind(mtg_id)
    .execute(&mut *conn)
    .await?;

    Ok(result.rows_affected())
}
