pub mod health;
pub mod product;
pub mod term;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /product                          list, create
/// /product/{id}                     get, update, delete
/// /terms                            create
/// /terms/{language}                 list by language (GET); update/delete by id (PUT/DELETE)
/// /terms/{language}/{section_key}   list filtered by section
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/product", product::router())
        .nest("/terms", term::router())
}
