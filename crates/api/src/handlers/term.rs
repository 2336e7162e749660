//! Handlers for the `/api/terms` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use pricelist_core::error::CoreError;
use pricelist_core::types::DbId;
use pricelist_db::models::term::{CreateTerm, Language, Term, UpdateTerm};
use pricelist_db::repositories::TermRepo;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::response::{ApiResponse, MessageResponse};
use crate::state::AppState;

/// GET /api/terms/{language}
///
/// The path parameter must parse into the supported language set; anything
/// else is a 400.
pub async fn list_by_language(
    State(state): State<AppState>,
    Path(language): Path<String>,
) -> AppResult<Json<ApiResponse<Vec<Term>>>> {
    let language: Language = language.parse()?;

    let terms = TermRepo::list_by_language(&state.pool, language).await?;
    Ok(Json(ApiResponse::new(terms)))
}

/// GET /api/terms/{language}/{section_key}
pub async fn list_by_section(
    State(state): State<AppState>,
    Path((language, section_key)): Path<(String, String)>,
) -> AppResult<Json<ApiResponse<Vec<Term>>>> {
    let language: Language = language.parse()?;

    let terms = TermRepo::list_by_section(&state.pool, language, &section_key).await?;
    Ok(Json(ApiResponse::new(terms)))
}

/// POST /api/terms
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateTerm>,
) -> AppResult<(StatusCode, Json<ApiResponse<Term>>)> {
    validate_create(&input)?;

    let term = TermRepo::create(&state.pool, &input).await?;

    tracing::info!(
        term_id = %term.id,
        language = %term.language,
        section_key = %term.section_key,
        "Term created",
    );

    Ok((StatusCode::CREATED, Json(ApiResponse::new(term))))
}

/// PUT /api/terms/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateTerm>,
) -> AppResult<Json<ApiResponse<Term>>> {
    validate_update(&input)?;

    let term = TermRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Term", id }))?;
    Ok(Json(ApiResponse::new(term)))
}

/// DELETE /api/terms/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let deleted = TermRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Term", id }));
    }

    tracing::info!(term_id = %id, "Term deleted");

    Ok(Json(MessageResponse::new("Term deleted successfully")))
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate_create(input: &CreateTerm) -> Result<(), CoreError> {
    require_non_empty("section_key", &input.section_key)?;
    require_non_empty("title", &input.title)?;
    require_non_empty("content", &input.content)?;
    Ok(())
}

fn validate_update(input: &UpdateTerm) -> Result<(), CoreError> {
    for (field, value) in [
        ("section_key", &input.section_key),
        ("title", &input.title),
        ("content", &input.content),
    ] {
        if let Some(v) = value {
            require_non_empty(field, v)?;
        }
    }
    Ok(())
}

fn require_non_empty(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}
