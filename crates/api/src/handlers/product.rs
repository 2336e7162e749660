//! Handlers for the `/api/product` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use pricelist_core::error::CoreError;
use pricelist_core::types::DbId;
use pricelist_db::models::product::{CreateProduct, Product, ProductPage, UpdateProduct};
use pricelist_db::repositories::{clamp_limit, ProductRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::response::{ApiResponse, MessageResponse};
use crate::state::AppState;

/// Query parameters for the product listing (`?page=&limit=&artical_no=`).
#[derive(Debug, Deserialize)]
pub struct ListProductsParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub artical_no: Option<String>,
}

/// POST /api/product
///
/// Required fields arrive enforced by the typed body; string fields are
/// additionally checked non-empty. A duplicate `artical_no` is classified
/// as a 409 by the error layer.
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateProduct>,
) -> AppResult<(StatusCode, Json<ApiResponse<Product>>)> {
    validate_create(&input)?;

    let product = ProductRepo::create(&state.pool, &input).await?;

    tracing::info!(
        product_id = %product.id,
        artical_no = %product.artical_no,
        "Product created",
    );

    Ok((StatusCode::CREATED, Json(ApiResponse::new(product))))
}

/// GET /api/product
///
/// Lists active products newest-first. `page` defaults to 0, `limit` to 50;
/// the row offset is `page * limit`. `artical_no` narrows the listing to an
/// exact match.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListProductsParams>,
) -> AppResult<Json<ApiResponse<ProductPage>>> {
    let limit = clamp_limit(params.limit, 50, 500);
    let page = params.page.unwrap_or(0).max(0);
    let offset = page * limit;

    let (count, rows) =
        ProductRepo::find_and_count(&state.pool, params.artical_no.as_deref(), limit, offset)
            .await?;

    Ok(Json(ApiResponse::new(ProductPage { count, rows })))
}

/// GET /api/product/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<Product>>> {
    let product = ProductRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }))?;
    Ok(Json(ApiResponse::new(product)))
}

/// PUT /api/product/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateProduct>,
) -> AppResult<Json<ApiResponse<Product>>> {
    validate_update(&input)?;

    let product = ProductRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }))?;
    Ok(Json(ApiResponse::new(product)))
}

/// DELETE /api/product/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let deleted = ProductRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }));
    }

    tracing::info!(product_id = %id, "Product deleted");

    Ok(Json(MessageResponse::new("Product deleted successfully")))
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Field-level checks beyond what deserialization enforces.
///
/// `price` presence is guaranteed by the typed body; 0.00 is a legitimate
/// value (free-of-charge items) and passes.
fn validate_create(input: &CreateProduct) -> Result<(), CoreError> {
    require_non_empty("artical_no", &input.artical_no)?;
    require_non_empty("product_service", &input.product_service)?;
    require_non_empty("unit", &input.unit)?;
    Ok(())
}

fn validate_update(input: &UpdateProduct) -> Result<(), CoreError> {
    for (field, value) in [
        ("artical_no", &input.artical_no),
        ("product_service", &input.product_service),
        ("unit", &input.unit),
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
