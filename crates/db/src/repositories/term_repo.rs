//! Repository for the `terms` table.

use pricelist_core::types::DbId;
use sqlx::PgPool;

use crate::models::term::{CreateTerm, Language, Term, UpdateTerm};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, language, section_key, title, content, order_index, is_active, created_at, updated_at";

/// Provides CRUD operations for terms.
pub struct TermRepo;

impl TermRepo {
    /// Insert a new term, returning the created row.
    ///
    /// If `order_index` is `None`, defaults to 0. If `is_active` is `None`,
    /// defaults to true.
    pub async fn create(pool: &PgPool, input: &CreateTerm) -> Result<Term, sqlx::Error> {
        let query = format!(
            "INSERT INTO terms
                (language, section_key, title, content, order_index, is_active)
             VALUES ($1, $2, $3, $4, COALESCE($5, 0), COALESCE($6, true))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Term>(&query)
            .bind(input.language)
            .bind(&input.section_key)
            .bind(&input.title)
            .bind(&input.content)
            .bind(input.order_index)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    /// Find a term by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Term>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM terms WHERE id = $1");
        sqlx::query_as::<_, Term>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List active terms for a language, newest first.
    pub async fn list_by_language(
        pool: &PgPool,
        language: Language,
    ) -> Result<Vec<Term>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM terms
             WHERE language = $1 AND is_active = true
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Term>(&query)
            .bind(language)
            .fetch_all(pool)
            .await
    }

    /// List active terms for a language within one section, newest first.
    pub async fn list_by_section(
        pool: &PgPool,
        language: Language,
        section_key: &str,
    ) -> Result<Vec<Term>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM terms
             WHERE language = $1 AND section_key = $2 AND is_active = true
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Term>(&query)
            .bind(language)
            .bind(section_key)
            .fetch_all(pool)
            .await
    }

    /// Update a term. Only non-`None` fields in `input` are applied;
    /// `updated_at` is refreshed on every successful update.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTerm,
    ) -> Result<Option<Term>, sqlx::Error> {
        let query = format!(
            "UPDATE terms SET
                language = COALESCE($2, language),
                section_key = COALESCE($3, section_key),
                title = COALESCE($4, title),
                content = COALESCE($5, content),
                order_index = COALESCE($6, order_index),
                is_active = COALESCE($7, is_active),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Term>(&query)
            .bind(id)
            .bind(input.language)
            .bind(&input.section_key)
            .bind(&input.title)
            .bind(&input.content)
            .bind(input.order_index)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Delete a term by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM terms WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
