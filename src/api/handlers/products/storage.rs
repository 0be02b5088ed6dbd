//! SQL storage for the `products` table.
//!
//! Each method runs exactly one statement (the test teardown in `clear` is the
//! only exception). Nothing here wraps work in a transaction, and `update` /
//! `delete` succeed whether or not a row matched.

use sqlx::PgPool;
use tracing::instrument;

use super::types::{Product, ProductPayload, SortField, SortMode};

pub const SCHEMA_SQL: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/sql/schema.sql"));

// `id` is read as int8 so rows and path ids share one Rust type.
macro_rules! select_products {
    ($tail:literal) => {
        concat!("SELECT id::int8 AS id, name, price FROM products", $tail)
    };
}

const SELECT_BY_ID: &str = select_products!(" WHERE id = $1");
const SELECT_PAGE: &str = select_products!(" LIMIT $1 OFFSET $2");
const SELECT_MATCHING: &str = select_products!(" WHERE name ILIKE '%' || $1 || '%'");
const INSERT: &str = "INSERT INTO products (name, price) VALUES ($1, $2) RETURNING id::int8";
const UPDATE: &str = "UPDATE products SET name = $1, price = $2 WHERE id = $3";
const DELETE: &str = "DELETE FROM products WHERE id = $1";

/// Handle to the product table. Cloning is cheap; all clones share one pool.
#[derive(Debug, Clone)]
pub struct Products {
    pool: PgPool,
}

impl Products {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Point lookup by primary key. `Ok(None)` means no row matched.
    ///
    /// # Errors
    /// Returns the driver error if the query fails.
    #[instrument(level = "debug", skip(self))]
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Product>, sqlx::Error> {
        sqlx::query_as::<_, Product>(SELECT_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Page through products in storage order.
    ///
    /// # Errors
    /// Returns the driver error if the query fails.
    #[instrument(level = "debug", skip(self))]
    pub async fn list(&self, start: i64, count: i64) -> Result<Vec<Product>, sqlx::Error> {
        sqlx::query_as::<_, Product>(SELECT_PAGE)
            .bind(count)
            .bind(start)
            .fetch_all(&self.pool)
            .await
    }

    /// Insert a product and return it with the id assigned by the sequence.
    ///
    /// # Errors
    /// Returns the driver error if the insert fails.
    #[instrument(level = "debug", skip(self))]
    pub async fn create(&self, payload: ProductPayload) -> Result<Product, sqlx::Error> {
        let id: i64 = sqlx::query_scalar(INSERT)
            .bind(&payload.name)
            .bind(payload.price)
            .fetch_one(&self.pool)
            .await?;

        Ok(payload.into_product(id))
    }

    /// # Errors
    /// Returns the driver error if the update fails.
    #[instrument(level = "debug", skip(self))]
    pub async fn update(&self, id: i64, payload: ProductPayload) -> Result<Product, sqlx::Error> {
        sqlx::query(UPDATE)
            .bind(&payload.name)
            .bind(payload.price)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(payload.into_product(id))
    }

    /// # Errors
    /// Returns the driver error if the delete fails.
    #[instrument(level = "debug", skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), sqlx::Error> {
        sqlx::query(DELETE).bind(id).execute(&self.pool).await?;
        Ok(())
    }

    /// Case-insensitive substring match on `name`. LIKE wildcards in the
    /// term are escaped, so `%` and `_` only match themselves.
    ///
    /// # Errors
    /// Returns the driver error if the query fails.
    #[instrument(level = "debug", skip(self))]
    pub async fn search(&self, term: &str) -> Result<Vec<Product>, sqlx::Error> {
        sqlx::query_as::<_, Product>(SELECT_MATCHING)
            .bind(escape_like(term))
            .fetch_all(&self.pool)
            .await
    }

    /// # Errors
    /// Returns the driver error if the query fails.
    #[instrument(level = "debug", skip(self))]
    pub async fn order_by(
        &self,
        field: SortField,
        mode: SortMode,
    ) -> Result<Vec<Product>, sqlx::Error> {
        sqlx::query_as::<_, Product>(order_statement(field, mode))
            .fetch_all(&self.pool)
            .await
    }

    /// Create the `products` table if it does not exist yet.
    ///
    /// # Errors
    /// Returns the driver error if the DDL fails.
    pub async fn ensure_table(&self) -> Result<(), sqlx::Error> {
        sqlx::query(SCHEMA_SQL.trim().trim_end_matches(';'))
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Remove every row and restart the id sequence at 1. Test teardown only.
    ///
    /// # Errors
    /// Returns the driver error if either statement fails.
    pub async fn clear(&self) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM products")
            .execute(&self.pool)
            .await?;
        sqlx::query("ALTER SEQUENCE products_id_seq RESTART WITH 1")
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

const fn order_statement(field: SortField, mode: SortMode) -> &'static str {
    match (field, mode) {
        (SortField::Name, SortMode::Asc) => select_products!(" ORDER BY name ASC"),
        (SortField::Name, SortMode::Desc) => select_products!(" ORDER BY name DESC"),
        (SortField::Price, SortMode::Asc) => select_products!(" ORDER BY price ASC"),
        (SortField::Price, SortMode::Desc) => select_products!(" ORDER BY price DESC"),
    }
}

// `\` is the default LIKE escape character in Postgres.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}
