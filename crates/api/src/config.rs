use customers_core::auth::DEFAULT_AUTH_TOKEN;

/// Server configuration loaded from environment variables.
///
/// Loaded once at startup and shared read-only through
/// [`AppState`](crate::state::AppState).
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `2009`).
    pub port: u16,
    /// PostgreSQL connection string.
    pub database_url: String,
    /// Exact value every request must send in the `Authorization` header.
    pub auth_token: String,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `2009`                     |
    /// | `DATABASE_URL`         | (required)                 |
    /// | `AUTH_TOKEN`           | `November 10, 2009`        |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "2009".into())
            .parse()
            .expect("PORT must be a valid u16");

        let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

        let auth_token =
            std::env::var("AUTH_TOKEN").unwrap_or_else(|_| DEFAULT_AUTH_TOKEN.into());

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Self {
            host,
            port,
            database_url,
            auth_token,
            cors_origins,
        }
    }
}
