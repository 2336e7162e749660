//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod product_repo;
pub mod term_repo;

pub use product_repo::ProductRepo;
pub use term_repo::TermRepo;

/// Clamp an optional client-supplied limit to `[1, max]`, falling back to
/// `default` when absent.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).clamp(1, max)
}
