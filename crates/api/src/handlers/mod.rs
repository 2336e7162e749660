//! Request handlers for the product and term resources.
//!
//! Each submodule provides async handler functions (create, list, get_by_id,
//! update, delete) for a single entity type. Handlers delegate to the
//! corresponding repository in `pricelist_db` and map errors via [`AppError`].
//!
//! [`AppError`]: crate::error::AppError

pub mod product;
pub mod term;
