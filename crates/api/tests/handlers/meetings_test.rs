use axum::http::StatusCode;
use mockall::predicate::eq;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::test_utils::{meeting, rooms, server_with, unreachable_server};

const BOOKED: &str =
    "ERROR: meeting room is already booked for the specified time. Please try another room.";
const INVALID: &str = "ERROR: invalid payload. Please ensure that your request body is properly \
                       formatted. GET /api/v1 for formatting details.";

fn standup_body() -> Value {
    json!({
        "room_id": 1,
        "mtg_name": "standup",
        "mtg_date": "2021-06-30",
        "start_time": "09:00",
        "end_time": "09:30"
    })
}

#[tokio::test]
async fn test_list_meetings() {
    let server = server_with(|store| {
        store
            .expect_all_meetings()
            .returning(|| Ok(vec![meeting(1, 1, (9, 0), (9, 30)), meeting(2, 2, (10, 0), (11, 0))]));
    });

    let response = server.get("/api/v1/meetings").await;
    response.assert_status(StatusCode::OK);

    let body: Value = response.json();
    let meetings = body["meetings"].as_array().unwrap();
    assert_eq!(meetings.len(), 2);
    assert_eq!(meetings[0]["mtg_date"], "2021-06-30");
    assert_eq!(meetings[0]["start_time"], "09:00:00");
    assert_eq!(meetings[1]["room_id"], 2);
}

#[tokio::test]
async fn test_create_meeting_success() {
    let server = server_with(|store| {
        store.expect_conflicting_meetings().returning(|_, _, _, _| Ok(vec![]));
        store.expect_all_rooms().returning(|| Ok(rooms()));
        store
            .expect_create_meeting()
            .withf(|m| m.room_id == 1 && m.mtg_date == "2021-06-30" && m.host_name.is_none())
            .returning(|_| Ok(Some(meeting(41, 1, (9, 0), (9, 30)))));
    });

    let response = server.post("/api/v1/meetings").json(&standup_body()).await;
    response.assert_status(StatusCode::CREATED);

    let body: Value = response.json();
    assert_eq!(body["meeting"]["mtg_id"], 41);
    assert_eq!(body["meeting"]["end_time"], "09:30:00");
}

#[tokio::test]
async fn test_create_meeting_room_booked() {
    let server = server_with(|store| {
        store
            .expect_conflicting_meetings()
            .returning(|_, _, _, _| Ok(vec![meeting(1, 1, (9, 0), (9, 30))]));
        store.expect_all_rooms().returning(|| Ok(rooms()));
    });

    let mut body = standup_body();
    body["start_time"] = json!("09:15");
    body["end_time"] = json!("09:45");

    let response = server.post("/api/v1/meetings").json(&body).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"], BOOKED);
}

#[tokio::test]
async fn test_create_meeting_with_string_room_id() {
    let server = server_with(|store| {
        store
            .expect_conflicting_meetings()
            .withf(|room_id, _, _, _| *room_id == 1)
            .returning(|_, _, _, _| Ok(vec![]));
        store.expect_all_rooms().returning(|| Ok(rooms()));
        store
            .expect_create_meeting()
            .withf(|m| m.room_id == 1)
            .returning(|_| Ok(Some(meeting(42, 1, (9, 0), (9, 30)))));
    });

    let mut body = standup_body();
    body["room_id"] = json!("1");

    let response = server.post("/api/v1/meetings").json(&body).await;
    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.json::<Value>()["meeting"]["mtg_id"], 42);
}

#[tokio::test]
async fn test_create_meeting_with_string_room_id_on_taken_slot() {
    let server = server_with(|store| {
        store
            .expect_conflicting_meetings()
            .withf(|room_id, _, _, _| *room_id == 1)
            .returning(|_, _, _, _| Ok(vec![meeting(1, 1, (9, 0), (9, 30))]));
        store.expect_all_rooms().returning(|| Ok(rooms()));
        store.expect_create_meeting().never();
    });

    let mut body = standup_body();
    body["room_id"] = json!("1");

    let response = server.post("/api/v1/meetings").json(&body).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"], BOOKED);
}

#[tokio::test]
async fn test_create_meeting_invalid_payloads() {
    let server = server_with(|store| {
        store.expect_conflicting_meetings().returning(|_, _, _, _| Ok(vec![]));
        store.expect_all_rooms().returning(|| Ok(rooms()));
    });

    let mut unknown_room = standup_body();
    unknown_room["room_id"] = json!(99);

    let mut bad_time = standup_body();
    bad_time["start_time"] = json!("9:00");

    let mut missing_name = standup_body();
    missing_name.as_object_mut().unwrap().remove("mtg_name");

    let mut room_as_text = standup_body();
    room_as_text["room_id"] = json!("one");

    for body in [unknown_room, bad_time, missing_name, room_as_text, json!({})] {
        let response = server.post("/api/v1/meetings").json(&body).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<Value>()["error"], INVALID, "{body}");
    }
}

#[tokio::test]
async fn test_create_meeting_malformed_json() {
    let server = server_with(|_| {});

    let response = server.post("/api/v1/meetings").text("{ room_id: 1").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"], INVALID);
}

#[tokio::test]
async fn test_create_meeting_store_failure_is_500() {
    let server = server_with(|store| {
        store
            .expect_conflicting_meetings()
            .returning(|_, _, _, _| Ok(vec![]));
        store.expect_all_rooms().returning(|| Ok(rooms()));
        store
            .expect_create_meeting()
            .returning(|_| Err(eyre::eyre!("date/time field value out of range")));
    });

    let response = server.post("/api/v1/meetings").json(&standup_body()).await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_delete_meeting() {
    let server = server_with(|store| {
        store.expect_delete_meeting().with(eq(5)).returning(|_| Ok(1));
        store.expect_delete_meeting().with(eq(999_999)).returning(|_| Ok(0));
    });

    let response = server.delete("/api/v1/meetings/5").await;
    response.assert_status(StatusCode::NO_CONTENT);
    assert!(response.text().is_empty());

    let response = server.delete("/api/v1/meetings/999999").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["error"],
        "ERROR: meeting with id 999999 not found."
    );
}

#[tokio::test]
async fn test_delete_meeting_non_numeric_id() {
    let server = server_with(|_| {});

    let response = server.delete("/api/v1/meetings/abc").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"], "ERROR: meeting with id abc not found.");
}

#[tokio::test]
async fn test_meetings_unreachable_database() {
    let server = unreachable_server();

    server
        .get("/api/v1/meetings")
        .await
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    server
        .post("/api/v1/meetings")
        .json(&standup_body())
        .await
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR);
}
