//! Integration tests for food logs

mod common;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use serde_json::{json, Value};

fn meal_body(date: Option<&str>, name: &str, calories: f64, meal_time: Option<&str>) -> Value {
    let mut meal = json!({
        "name": name,
        "food_name": "Rice and beans",
        "calories": calories,
        "protein": 20.5,
        "carbs": 60,
        "fats": 7.25
    });
    if let Some(meal_time) = meal_time {
        meal["meal_time"] = json!(meal_time);
    }

    let mut body = json!({ "meal": meal });
    if let Some(date) = date {
        body["date"] = json!(date);
    }
    body
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_meals_accumulate_into_one_day() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;

    let (status, body) = app
        .post_auth(
            "/api/v1/food-logs",
            &user.access_token,
            &meal_body(Some("2024-05-01"), "Lunch", 500.0, Some("lunch")),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let first = common::parse(&body);
    assert_eq!(first["food_log"]["date"], "2024-05-01");
    assert_eq!(first["food_log"]["meals"][0]["meal_time"], "lunch");

    // Same day given as a timestamp
    let (status, body) = app
        .post_auth(
            "/api/v1/food-logs",
            &user.access_token,
            &meal_body(Some("2024-05-01T19:45:00Z"), "Dinner", 700.0, None),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let log = &common::parse(&body)["food_log"];
    assert_eq!(log["id"], first["food_log"]["id"]);
    assert_eq!(log["meals"].as_array().unwrap().len(), 2);
    assert_eq!(log["meals"][1]["meal_time"], "snack");
    assert_eq!(log["daily_totals"]["calories"], 1200.0);
    assert_eq!(log["daily_totals"]["protein"], 41.0);
    assert_eq!(log["daily_totals"]["fats"], 14.5);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_default_date_is_today() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;

    let (status, _) = app
        .post_auth("/api/v1/food-logs", &user.access_token, &meal_body(None, "Snack", 150.0, None))
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = app.get_auth("/api/v1/food-logs", &user.access_token).await;
    assert_eq!(status, StatusCode::OK);

    let logs = common::parse(&body);
    let logs = logs["food_logs"].as_array().unwrap();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0]["date"], Utc::now().date_naive().to_string());
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_range_queries() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;

    for date in ["2024-05-03", "2024-05-01", "2024-05-02"] {
        app.post_auth(
            "/api/v1/food-logs",
            &user.access_token,
            &meal_body(Some(date), "Lunch", 400.0, Some("lunch")),
        )
        .await;
    }

    let dates = |body: &str| -> Vec<String> {
        common::parse(body)["food_logs"]
            .as_array()
            .unwrap()
            .iter()
            .map(|log| log["date"].as_str().unwrap().to_string())
            .collect()
    };

    let (_, body) = app
        .get_auth(
            "/api/v1/food-logs?start_date=2024-05-01&end_date=2024-05-03",
            &user.access_token,
        )
        .await;
    assert_eq!(dates(&body), vec!["2024-05-01", "2024-05-02", "2024-05-03"]);

    let (_, body) = app
        .get_auth("/api/v1/food-logs?start_date=2024-05-02", &user.access_token)
        .await;
    assert_eq!(dates(&body), vec!["2024-05-02"]);

    let (status, body) = app
        .get_auth(
            "/api/v1/food-logs?start_date=2024-05-03&end_date=2024-05-01",
            &user.access_token,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(dates(&body).is_empty());

    // End only runs from today, so past days are excluded
    let (_, body) = app
        .get_auth("/api/v1/food-logs?end_date=2024-05-03", &user.access_token)
        .await;
    assert!(dates(&body).is_empty());
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_end_only_range_includes_future_days() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;
    let tomorrow = (Utc::now().date_naive() + Duration::days(1)).to_string();

    app.post_auth(
        "/api/v1/food-logs",
        &user.access_token,
        &meal_body(Some(&tomorrow), "Prep", 300.0, None),
    )
    .await;

    let (_, body) = app
        .get_auth(&format!("/api/v1/food-logs?end_date={}", tomorrow), &user.access_token)
        .await;
    assert_eq!(common::parse(&body)["food_logs"].as_array().unwrap().len(), 1);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_logs_are_private() {
    let app = common::TestApp::new().await;
    let owner = app.create_test_user().await;
    let other = app.create_test_user().await;

    app.post_auth(
        "/api/v1/food-logs",
        &owner.access_token,
        &meal_body(Some("2024-06-01"), "Lunch", 400.0, None),
    )
    .await;

    let (_, body) = app
        .get_auth("/api/v1/food-logs?start_date=2024-06-01", &other.access_token)
        .await;
    assert!(common::parse(&body)["food_logs"].as_array().unwrap().is_empty());
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_csv_export() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;

    app.post_auth(
        "/api/v1/food-logs",
        &user.access_token,
        &meal_body(Some("2024-07-04"), "Breakfast", 320.0, Some("breakfast")),
    )
    .await;

    let (status, csv) = app
        .get_auth("/api/v1/food-logs/export?start_date=2024-07-04", &user.access_token)
        .await;
    assert_eq!(status, StatusCode::OK);

    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "date,meal_time,name,food_name,calories,protein,carbs,fats");
    assert_eq!(lines.len(), 2);
    assert!(lines[1].starts_with("2024-07-04,breakfast,Breakfast,Rice and beans,320"));
}
