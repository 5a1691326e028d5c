//! HTTP-level integration tests for the logged hours endpoints.

mod common;

use axum::http::StatusCode;
use axum::Router;
use common::{body_bytes, body_json, get_auth, post_json_auth, token};
use serde_json::{json, Value};
use sqlx::PgPool;

const BASE: &str = "/api/logged-hours";

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn submit(app: &Router, token: &str, date: &str, description: &str, hours: i32) {
    let body = json!({ "date": date, "description": description, "hours": hours });
    let response = post_json_auth(app.clone(), BASE, token, body).await;
    assert_eq!(response.status(), StatusCode::OK);
}

async fn report(app: &Router, worker_id: &str, filter_type: Value, date: &str) -> Vec<String> {
    let body = json!({ "workerId": worker_id, "filterType": filter_type, "dateFilter": date });
    let response = post_json_auth(
        app.clone(),
        &format!("{BASE}/report"),
        &token("reviewer", "Rita"),
        body,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    body_json(response)
        .await
        .as_array()
        .expect("report should be an array")
        .iter()
        .map(|row| row["date"].as_str().unwrap().to_string())
        .collect()
}

// ---------------------------------------------------------------------------
// Own hours
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn submit_then_list_own_hours(pool: PgPool) {
    let app = common::build_test_app(pool);
    let alice = token("u1", "Alice");

    let response = post_json_auth(
        app.clone(),
        BASE,
        &alice,
        json!({ "date": "2024-03-05", "description": "design review", "hours": 4 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_bytes(response).await.is_empty());

    let response = get_auth(app.clone(), BASE, &alice).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;

    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["workerId"], "u1");
    assert_eq!(rows[0]["workerName"], "Alice");
    assert_eq!(rows[0]["description"], "design review");
    assert_eq!(rows[0]["hours"], 4);
    assert_eq!(rows[0]["date"], "2024-03-05T00:00:00");
    assert_eq!(rows[0]["approved"], false);
    assert!(rows[0]["id"].is_number());
}

#[sqlx::test(migrations = "./migrations")]
async fn own_hours_are_scoped_to_the_caller_and_sorted(pool: PgPool) {
    let app = common::build_test_app(pool);
    let alice = token("u1", "Alice");
    let bob = token("u2", "Bob");

    submit(&app, &alice, "2024-03-07T09:00:00", "later", 2).await;
    submit(&app, &alice, "2024-03-01T09:00:00", "earlier", 3).await;
    submit(&app, &bob, "2024-03-02T09:00:00", "bob's", 5).await;

    let json = body_json(get_auth(app.clone(), BASE, &alice).await).await;
    let descriptions: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["description"].as_str().unwrap())
        .collect();

    assert_eq!(descriptions, vec!["earlier", "later"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn worker_identity_comes_from_the_token_not_the_body(pool: PgPool) {
    let app = common::build_test_app(pool);
    let alice = token("u1", "Alice");

    let body = json!({
        "date": "2024-03-05",
        "description": "sneaky",
        "hours": 1,
        "workerId": "u2",
        "workerName": "Bob",
    });
    let response = post_json_auth(app.clone(), BASE, &alice, body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(get_auth(app.clone(), BASE, &token("u2", "Bob")).await).await;
    assert!(json.as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn invalid_submissions_are_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let alice = token("u1", "Alice");

    for body in [
        json!({ "date": "2024-03-05", "description": "too much", "hours": 25 }),
        json!({ "date": "2024-03-05", "description": "nothing", "hours": 0 }),
        json!({ "date": "2024-03-05", "description": "  ", "hours": 4 }),
    ] {
        let response = post_json_auth(app.clone(), BASE, &alice, body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_json(response).await["error"].is_string());
    }

    let json = body_json(get_auth(app.clone(), BASE, &alice).await).await;
    assert!(json.as_array().unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Review queue
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn end_to_end_review_flow(pool: PgPool) {
    let app = common::build_test_app(pool);
    let alice = token("u1", "Alice");
    let reviewer = token("r1", "Rita");

    submit(&app, &alice, "2024-03-05", "design review", 4).await;

    let own = body_json(get_auth(app.clone(), BASE, &alice).await).await;
    let id = own[0]["id"].as_i64().unwrap();
    assert_eq!(own[0]["approved"], false);

    let queue = body_json(get_auth(app.clone(), &format!("{BASE}/in-review"), &reviewer).await).await;
    let queue = queue.as_array().unwrap();
    assert_eq!(queue.len(), 1);
    assert_eq!(queue[0]["id"], id);
    assert_eq!(queue[0]["workerName"], "Alice");
    assert!(queue[0].get("approved").is_none());

    let response = post_json_auth(
        app.clone(),
        &format!("{BASE}/in-review"),
        &reviewer,
        json!({ "id": id }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let queue = body_json(get_auth(app.clone(), &format!("{BASE}/in-review"), &reviewer).await).await;
    assert!(queue.as_array().unwrap().is_empty());

    let own = body_json(get_auth(app.clone(), BASE, &alice).await).await;
    assert_eq!(own[0]["approved"], true);
}

#[sqlx::test(migrations = "./migrations")]
async fn mark_reviewed_is_idempotent_and_ignores_unknown_ids(pool: PgPool) {
    let app = common::build_test_app(pool);
    let alice = token("u1", "Alice");
    let reviewer = token("r1", "Rita");
    let in_review = format!("{BASE}/in-review");

    submit(&app, &alice, "2024-03-05", "first", 4).await;
    submit(&app, &alice, "2024-03-06", "second", 4).await;
    let own = body_json(get_auth(app.clone(), BASE, &alice).await).await;
    let first_id = own[0]["id"].as_i64().unwrap();

    for _ in 0..2 {
        let response =
            post_json_auth(app.clone(), &in_review, &reviewer, json!({ "id": first_id })).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response =
        post_json_auth(app.clone(), &in_review, &reviewer, json!({ "id": 987_654 })).await;
    assert_eq!(response.status(), StatusCode::OK);

    let queue = body_json(get_auth(app.clone(), &in_review, &reviewer).await).await;
    let queue = queue.as_array().unwrap();
    assert_eq!(queue.len(), 1);
    assert_eq!(queue[0]["description"], "second");
}

#[sqlx::test(migrations = "./migrations")]
async fn review_queue_spans_all_workers_in_date_order(pool: PgPool) {
    let app = common::build_test_app(pool);

    submit(&app, &token("u1", "Alice"), "2024-03-06", "alice", 4).await;
    submit(&app, &token("u2", "Bob"), "2024-03-04", "bob", 4).await;

    let queue =
        body_json(get_auth(app.clone(), &format!("{BASE}/in-review"), &token("r1", "Rita")).await)
            .await;
    let names: Vec<&str> = queue
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["workerName"].as_str().unwrap())
        .collect();

    assert_eq!(names, vec!["Bob", "Alice"]);
}

// ---------------------------------------------------------------------------
// Reports
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn day_report_ignores_time_of_day(pool: PgPool) {
    let app = common::build_test_app(pool);
    let alice = token("u1", "Alice");

    submit(&app, &alice, "2024-03-04T23:30:00", "day before", 1).await;
    submit(&app, &alice, "2024-03-05T00:00:00", "midnight", 1).await;
    submit(&app, &alice, "2024-03-05T17:15:00", "afternoon", 1).await;
    submit(&app, &alice, "2024-03-06T00:00:00", "day after", 1).await;
    submit(&app, &token("u2", "Bob"), "2024-03-05T10:00:00", "bob", 1).await;

    let dates = report(&app, "u1", json!(1), "2024-03-05T12:00:00").await;
    assert_eq!(dates, vec!["2024-03-05T00:00:00", "2024-03-05T17:15:00"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn week_report_follows_iso_weeks(pool: PgPool) {
    let app = common::build_test_app(pool);
    let alice = token("u1", "Alice");

    submit(&app, &alice, "2022-01-04", "week 1 of 2022", 1).await;
    submit(&app, &alice, "2022-12-31", "week 52 of 2022", 1).await;
    submit(&app, &alice, "2023-01-02", "monday", 1).await;
    submit(&app, &alice, "2023-01-08T20:00:00", "sunday", 1).await;
    submit(&app, &alice, "2023-01-09", "next monday", 1).await;

    let dates = report(&app, "u1", json!(2), "2023-01-02").await;
    assert_eq!(
        dates,
        vec![
            "2022-01-04T00:00:00",
            "2023-01-02T00:00:00",
            "2023-01-08T20:00:00",
        ]
    );

    let by_name = report(&app, "u1", json!("Week"), "2023-01-05").await;
    assert_eq!(by_name, dates);
}

#[sqlx::test(migrations = "./migrations")]
async fn month_report_matches_year_and_month(pool: PgPool) {
    let app = common::build_test_app(pool);
    let alice = token("u1", "Alice");

    submit(&app, &alice, "2023-03-10", "last year", 1).await;
    submit(&app, &alice, "2024-02-29", "february", 1).await;
    submit(&app, &alice, "2024-03-01", "first", 1).await;
    submit(&app, &alice, "2024-03-31T23:59:00", "last", 1).await;
    submit(&app, &alice, "2024-04-01", "april", 1).await;

    let dates = report(&app, "u1", json!(3), "2024-03-15").await;
    assert_eq!(dates, vec!["2024-03-01T00:00:00", "2024-03-31T23:59:00"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn report_rows_carry_full_entries(pool: PgPool) {
    let app = common::build_test_app(pool);
    submit(&app, &token("u1", "Alice"), "2024-03-05", "design review", 4).await;

    let response = post_json_auth(
        app.clone(),
        &format!("{BASE}/report"),
        &token("r1", "Rita"),
        json!({ "workerId": "u1", "filterType": "Day", "dateFilter": "2024-03-05" }),
    )
    .await;
    let rows = body_json(response).await;

    assert_eq!(rows[0]["workerId"], "u1");
    assert_eq!(rows[0]["workerName"], "Alice");
    assert_eq!(rows[0]["hours"], 4);
    assert_eq!(rows[0]["approved"], false);
}

#[sqlx::test(migrations = "./migrations")]
async fn report_for_unknown_worker_is_empty(pool: PgPool) {
    let app = common::build_test_app(pool);

    let dates = report(&app, "nobody", json!(3), "2024-03-15").await;
    assert!(dates.is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn unknown_filter_type_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json_auth(
        app.clone(),
        &format!("{BASE}/report"),
        &token("r1", "Rita"),
        json!({ "workerId": "u1", "filterType": 9, "dateFilter": "2024-03-15" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// ---------------------------------------------------------------------------
// Workers
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn workers_are_distinct_and_sorted_by_name(pool: PgPool) {
    let app = common::build_test_app(pool);

    submit(&app, &token("u2", "Bob"), "2024-03-01", "one", 1).await;
    submit(&app, &token("u1", "Alice"), "2024-03-01", "two", 1).await;
    submit(&app, &token("u1", "Alice"), "2024-03-02", "three", 1).await;
    submit(&app, &token("u1", "Alice Smith"), "2024-03-03", "renamed", 1).await;

    let json =
        body_json(get_auth(app.clone(), &format!("{BASE}/workers"), &token("r1", "Rita")).await)
            .await;

    assert_eq!(
        json,
        json!([
            { "workerId": "u1", "workerName": "Alice" },
            { "workerId": "u1", "workerName": "Alice Smith" },
            { "workerId": "u2", "workerName": "Bob" },
        ])
    );
}
