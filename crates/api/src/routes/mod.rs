pub mod customer;

use axum::Router;

use crate::state::AppState;

/// Build the route tree.
///
/// Route hierarchy:
///
/// ```text
/// /customers                                       list, create
/// /customers/{id}                                  get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/customers", customer::router())
}
