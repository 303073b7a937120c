//! HTTP-level tests for `/api/v1/exam-configs`.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_config_returns_default(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/api/v1/exam-configs/5/A/2024-2025").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = &json["data"];
    assert_eq!(data["is_default"], true);
    assert!(data["id"].is_null());
    assert_eq!(data["class_name"], "5");

    let entries = data["exam_configs"].as_array().unwrap();
    let types: Vec<&str> = entries.iter().map(|e| e["exam_type"].as_str().unwrap()).collect();
    assert_eq!(types, vec!["pt1", "hy", "pt2", "final"]);
    for entry in entries {
        assert_eq!(entry["max_marks_written"], 80);
        assert_eq!(entry["max_marks_oral"], 20);
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn save_mapping_form_then_get(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = json!({
        "class": "5",
        "section": "A",
        "academic_year": "2024-2025",
        "config": {
            "final": { "max_marks_written": 60 },
            "pt1": { "max_marks_written": 40, "max_marks_oral": 10 }
        }
    });
    let response = post_json(app.clone(), "/api/v1/exam-configs", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    let saved = body_json(response).await;
    assert_eq!(saved["data"]["is_default"], false);

    let response = get(app, "/api/v1/exam-configs/5/A/2024-2025").await;
    let json = body_json(response).await;
    assert_eq!(
        json["data"]["exam_configs"],
        json!([
            { "exam_type": "pt1", "max_marks_written": 40, "max_marks_oral": 10 },
            { "exam_type": "final", "max_marks_written": 60, "max_marks_oral": 20 }
        ])
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn padded_key_is_saved_under_trimmed_key(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = json!({
        "class_name": "5 ",
        "section": " A",
        "academic_year": "2024-2025",
        "config": { "pt1": { "max_marks_written": 40 } }
    });
    let response = post_json(app.clone(), "/api/v1/exam-configs", body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(get(app, "/api/v1/exam-configs/5/A/2024-2025").await).await;
    assert_eq!(json["data"]["is_default"], false);
    assert_eq!(json["data"]["class_name"], "5");
    assert_eq!(json["data"]["section"], "A");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn save_replaces_previous_entries(pool: PgPool) {
    let app = common::build_test_app(pool);

    let first = json!({
        "class_name": "7",
        "section": "B",
        "academic_year": "2024-2025",
        "exam_configs": [
            { "exam_type": "hy" },
            { "exam_type": "pt1" }
        ]
    });
    post_json(app.clone(), "/api/v1/exam-configs", first).await;

    let second = json!({
        "class_name": "7",
        "section": "B",
        "academic_year": "2024-2025",
        "exam_configs": [ { "exam_type": "final", "max_marks_written": 100, "max_marks_oral": 0 } ]
    });
    let response = post_json(app.clone(), "/api/v1/exam-configs", second).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(get(app.clone(), "/api/v1/exam-configs/7/B/2024-2025").await).await;
    let entries = json["data"]["exam_configs"].as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["exam_type"], "final");

    let list = body_json(get(app, "/api/v1/exam-configs").await).await;
    assert_eq!(list["data"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_exam_type_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = json!({
        "class_name": "5",
        "section": "A",
        "academic_year": "2024-2025",
        "exam_configs": [ { "exam_type": "pt1" }, { "exam_type": "pt1" } ]
    });
    let response = post_json(app.clone(), "/api/v1/exam-configs", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"].as_str().unwrap().contains("duplicate exam type"));

    // Nothing was stored.
    let json = body_json(get(app, "/api/v1/exam-configs/5/A/2024-2025").await).await;
    assert_eq!(json["data"]["is_default"], true);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn negative_ceiling_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = json!({
        "class_name": "5",
        "section": "A",
        "academic_year": "2024-2025",
        "config": { "hy": { "max_marks_oral": -5 } }
    });
    let response = post_json(app, "/api/v1/exam-configs", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_config_body_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = json!({ "class_name": "5", "section": "A", "academic_year": "2024-2025" });
    let response = post_json(app, "/api/v1/exam-configs", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"], "config is required");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_is_sorted_by_class_section_then_newest_year(pool: PgPool) {
    let app = common::build_test_app(pool);

    for (class_name, section, year) in [
        ("6", "A", "2024-2025"),
        ("5", "B", "2024-2025"),
        ("5", "A", "2023-2024"),
        ("5", "A", "2024-2025"),
    ] {
        let body = json!({
            "class_name": class_name,
            "section": section,
            "academic_year": year,
            "config": { "pt1": {} }
        });
        post_json(app.clone(), "/api/v1/exam-configs", body).await;
    }

    let json = body_json(get(app, "/api/v1/exam-configs").await).await;
    let keys: Vec<String> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| {
            format!(
                "{}/{}/{}",
                c["class_name"].as_str().unwrap(),
                c["section"].as_str().unwrap(),
                c["academic_year"].as_str().unwrap()
            )
        })
        .collect();
    assert_eq!(
        keys,
        vec!["5/A/2024-2025", "5/A/2023-2024", "5/B/2024-2025", "6/A/2024-2025"]
    );
}
