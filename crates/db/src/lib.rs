use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// Upper bound on concurrently checked-out connections.
const MAX_CONNECTIONS: u32 = 20;

/// Create a connection pool from a database URL.
///
/// The pool connects lazily: no connection is opened until the first query,
/// so an unreachable database only fails the requests that need it. Only a
/// malformed URL is reported here.
pub fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect_lazy(database_url)
}
