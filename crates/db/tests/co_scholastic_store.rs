//! Integration tests for the co-scholastic area repository.

use skyview_core::co_scholastic::CoScholasticArea;
use skyview_db::models::co_scholastic::SaveCoScholasticAreas;
use skyview_db::repositories::CoScholasticAreaRepo;
use sqlx::PgPool;

fn area(name: &str) -> CoScholasticArea {
    CoScholasticArea {
        name: name.to_string(),
        description: None,
    }
}

fn save(class_name: &str, year: &str, names: &[&str]) -> SaveCoScholasticAreas {
    SaveCoScholasticAreas {
        class_name: class_name.to_string(),
        academic_year: year.to_string(),
        areas: names.iter().map(|n| area(n)).collect(),
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_find_missing_returns_none(pool: PgPool) {
    let found = CoScholasticAreaRepo::find(&pool, "5", "2024-2025").await.unwrap();
    assert!(found.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_upsert_then_find(pool: PgPool) {
    let input = save("5", "2024-2025", &["Art Education", "Work Education"])
        .normalized()
        .unwrap();
    let saved = CoScholasticAreaRepo::upsert(&pool, &input).await.unwrap();

    let found = CoScholasticAreaRepo::find(&pool, "5", "2024-2025")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.id, saved.id);
    assert_eq!(found.areas.0, input.areas);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_upsert_replaces_whole_list(pool: PgPool) {
    let first = CoScholasticAreaRepo::upsert(&pool, &save("5", "2024-2025", &["Art", "Music"]))
        .await
        .unwrap();
    let second = CoScholasticAreaRepo::upsert(&pool, &save("5", "2024-2025", &["Sports"]))
        .await
        .unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(second.areas.0, vec![area("Sports")]);

    let other_year = CoScholasticAreaRepo::find(&pool, "5", "2023-2024").await.unwrap();
    assert!(other_year.is_none());
}
