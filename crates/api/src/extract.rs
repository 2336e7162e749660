//! Request extractors with rejections translated into [`AppError`].

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};

use crate::error::AppError;

/// `axum::Json` with rejections mapped into the standard error envelope.
///
/// The stock extractor answers body data errors with 422 and a plain-text
/// body; the API contract here is a uniform 400 JSON body for any malformed
/// or incomplete input, so the mapping happens once at this seam instead of
/// in every handler.
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    axum::Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(value) = axum::Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        Ok(AppJson(value))
    }
}
