//! Repository for the `customers` table.

use customers_core::types::DbId;
use sqlx::PgPool;

use crate::models::customer::{Customer, CustomerInput};

/// Column list shared across queries to avoid repetition. `id` is widened
/// from int4 so it decodes as [`DbId`].
const COLUMNS: &str = "id::int8 AS id, name, email, status";

/// Provides CRUD operations for customers.
///
/// Every function runs exactly one statement on a connection checked out of
/// the pool for the duration of that statement.
pub struct CustomerRepo;

impl CustomerRepo {
    /// Create the `customers` table if it does not exist yet.
    pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS customers (
                id SERIAL PRIMARY KEY,
                name TEXT,
                email TEXT,
                status TEXT
            )",
        )
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Insert a new customer, returning the row with its generated id.
    ///
    /// Any id carried by `input` is ignored.
    pub async fn create(pool: &PgPool, input: &CustomerInput) -> Result<Customer, sqlx::Error> {
        let query = format!(
            "INSERT INTO customers (name, email, status)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Customer>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.status)
            .fetch_one(pool)
            .await
    }

    /// Find a customer by id. `None` means no row matched.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Customer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM customers WHERE id = $1");
        let customer = sqlx::query_as::<_, Customer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        if customer.is_none() {
            tracing::debug!(id, "No customer row returned");
        }
        Ok(customer)
    }

    /// List every customer in the store's scan order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Customer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM customers");
        sqlx::query_as::<_, Customer>(&query).fetch_all(pool).await
    }

    /// Overwrite name, email and status of the customer with `id`.
    ///
    /// Returns the number of rows affected: 0 when no row matched, else 1.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &CustomerInput,
    ) -> Result<u64, sqlx::Error> {
        let result =
            sqlx::query("UPDATE customers SET name = $1, email = $2, status = $3 WHERE id = $4")
                .bind(&input.name)
                .bind(&input.email)
                .bind(&input.status)
                .bind(id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected())
    }

    /// Permanently delete a customer. Returns the number of rows removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
