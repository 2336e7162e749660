//! Repository for the `products` table.

use pricelist_core::types::DbId;
use sqlx::PgPool;

use crate::models::product::{CreateProduct, Product, UpdateProduct};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, artical_no, product_service, in_price, price, unit, \
    in_stock, description, is_active, created_at, updated_at";

/// Provides CRUD operations for products.
pub struct ProductRepo;

impl ProductRepo {
    /// Insert a new product, returning the created row.
    ///
    /// If `in_price` is `None`, defaults to 0.00. If `in_stock` is `None`,
    /// defaults to 0. If `is_active` is `None`, defaults to true.
    ///
    /// A duplicate `artical_no` surfaces as a database error on the
    /// `uq_products_artical_no` constraint.
    pub async fn create(pool: &PgPool, input: &CreateProduct) -> Result<Product, sqlx::Error> {
        let query = format!(
            "INSERT INTO products
                (artical_no, product_service, in_price, price, unit, in_stock,
                 description, is_active)
             VALUES ($1, $2, COALESCE($3, 0.00), $4, $5, COALESCE($6, 0), $7,
                     COALESCE($8, true))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(&input.artical_no)
            .bind(&input.product_service)
            .bind(input.in_price)
            .bind(input.price)
            .bind(&input.unit)
            .bind(input.in_stock)
            .bind(&input.description)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    /// Find a product by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE id = $1");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List active products newest-first, together with the total number of
    /// matching rows (before pagination).
    ///
    /// `artical_no` narrows the listing to an exact match when provided.
    pub async fn find_and_count(
        pool: &PgPool,
        artical_no: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<(i64, Vec<Product>), sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM products
             WHERE is_active = true AND ($1::text IS NULL OR artical_no = $1)",
        )
        .bind(artical_no)
        .fetch_one(pool)
        .await?;

        let query = format!(
            "SELECT {COLUMNS} FROM products
             WHERE is_active = true AND ($1::text IS NULL OR artical_no = $1)
             ORDER BY created_at DESC, id DESC
             LIMIT $2 OFFSET $3"
        );
        let rows = sqlx::query_as::<_, Product>(&query)
            .bind(artical_no)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await?;

        Ok((count, rows))
    }

    /// Update a product. Only non-`None` fields in `input` are applied;
    /// `updated_at` is refreshed on every successful update.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProduct,
    ) -> Result<Option<Product>, sqlx::Error> {
        let query = format!(
            "UPDATE products SET
                artical_no = COALESCE($2, artical_no),
                product_service = COALESCE($3, product_service),
                in_price = COALESCE($4, in_price),
                price = COALESCE($5, price),
                unit = COALESCE($6, unit),
                in_stock = COALESCE($7, in_stock),
                description = COALESCE($8, description),
                is_active = COALESCE($9, is_active),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .bind(&input.artical_no)
            .bind(&input.product_service)
            .bind(input.in_price)
            .bind(input.price)
            .bind(&input.unit)
            .bind(input.in_stock)
            .bind(&input.description)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Delete a product by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
