//! Integration tests for the term repository.

use pricelist_db::models::term::{CreateTerm, Language, UpdateTerm};
use pricelist_db::repositories::TermRepo;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_term(language: Language, section_key: &str, title: &str) -> CreateTerm {
    CreateTerm {
        language,
        section_key: section_key.to_string(),
        title: title.to_string(),
        content: "Lorem ipsum dolor sit amet.".to_string(),
        order_index: None,
        is_active: None,
    }
}

fn no_update() -> UpdateTerm {
    UpdateTerm {
        language: None,
        section_key: None,
        title: None,
        content: None,
        order_index: None,
        is_active: None,
    }
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_applies_defaults(pool: PgPool) {
    let term = TermRepo::create(&pool, &new_term(Language::En, "privacy", "Intro"))
        .await
        .unwrap();

    assert_eq!(term.language, Language::En);
    assert_eq!(term.section_key, "privacy");
    assert_eq!(term.order_index, 0);
    assert!(term.is_active);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_stores_every_language(pool: PgPool) {
    for language in [Language::En, Language::Sv, Language::Fr] {
        let term = TermRepo::create(&pool, &new_term(language, "legal", "Section"))
            .await
            .unwrap();
        assert_eq!(term.language, language);
    }
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_by_language_filters_language_and_active(pool: PgPool) {
    TermRepo::create(&pool, &new_term(Language::En, "privacy", "English"))
        .await
        .unwrap();
    TermRepo::create(&pool, &new_term(Language::Sv, "privacy", "Swedish"))
        .await
        .unwrap();

    let mut hidden = new_term(Language::En, "privacy", "Hidden");
    hidden.is_active = Some(false);
    TermRepo::create(&pool, &hidden).await.unwrap();

    let terms = TermRepo::list_by_language(&pool, Language::En).await.unwrap();
    assert_eq!(terms.len(), 1);
    assert_eq!(terms[0].title, "English");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_by_language_returns_french_rows(pool: PgPool) {
    TermRepo::create(&pool, &new_term(Language::Fr, "privacy", "Francais"))
        .await
        .unwrap();

    let terms = TermRepo::list_by_language(&pool, Language::Fr).await.unwrap();
    assert_eq!(terms.len(), 1);
    assert_eq!(terms[0].title, "Francais");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_by_section_filters_section_key(pool: PgPool) {
    TermRepo::create(&pool, &new_term(Language::En, "privacy", "Privacy"))
        .await
        .unwrap();
    TermRepo::create(&pool, &new_term(Language::En, "cookies", "Cookies"))
        .await
        .unwrap();

    let terms = TermRepo::list_by_section(&pool, Language::En, "cookies")
        .await
        .unwrap();
    assert_eq!(terms.len(), 1);
    assert_eq!(terms[0].title, "Cookies");

    let terms = TermRepo::list_by_section(&pool, Language::En, "missing")
        .await
        .unwrap();
    assert!(terms.is_empty());
}

// ---------------------------------------------------------------------------
// Update / delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_merges_only_provided_fields(pool: PgPool) {
    let created = TermRepo::create(&pool, &new_term(Language::En, "privacy", "Old title"))
        .await
        .unwrap();

    let mut patch = no_update();
    patch.title = Some("New title".to_string());
    patch.order_index = Some(3);

    let updated = TermRepo::update(&pool, created.id, &patch)
        .await
        .unwrap()
        .expect("row should exist");

    assert_eq!(updated.title, "New title");
    assert_eq!(updated.order_index, 3);
    assert_eq!(updated.section_key, "privacy");
    assert_eq!(updated.content, created.content);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_missing_row_returns_none(pool: PgPool) {
    let result = TermRepo::update(&pool, uuid::Uuid::nil(), &no_update())
        .await
        .unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_removes_row(pool: PgPool) {
    let created = TermRepo::create(&pool, &new_term(Language::Sv, "privacy", "Delete me"))
        .await
        .unwrap();

    assert!(TermRepo::delete(&pool, created.id).await.unwrap());
    assert!(TermRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .is_none());
    assert!(!TermRepo::delete(&pool, created.id).await.unwrap());
}
