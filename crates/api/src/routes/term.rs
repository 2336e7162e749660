//! Route definitions for the term resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::term;
use crate::state::AppState;

/// Routes mounted at `/terms`.
///
/// The single-segment path is shared: GET interprets it as a language code,
/// PUT/DELETE interpret it as a term id. Axum allows only one parameter name
/// per segment position, so all three methods hang off one route entry.
///
/// ```text
/// POST   /                            -> create
/// GET    /{language}                  -> list_by_language
/// PUT    /{id}                        -> update
/// DELETE /{id}                        -> delete
/// GET    /{language}/{section_key}    -> list_by_section
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(term::create))
        .route(
            "/{key}",
            get(term::list_by_language)
                .put(term::update)
                .delete(term::delete),
        )
        .route("/{language}/{section_key}", get(term::list_by_section))
}
