//! Handlers for the `/customers` resource.
//!
//! Path rejections are taken as `Result`s so their text can be returned
//! verbatim with the status each route expects. Bodies are decoded as JSON
//! whatever their `Content-Type`.

use axum::body::Bytes;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use customers_core::error::CoreError;
use customers_core::types::DbId;
use customers_db::models::customer::{Customer, CustomerInput};
use customers_db::repositories::CustomerRepo;

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

/// Unwrap a path id, reporting a malformed one as 400.
fn parse_id(path: Result<Path<DbId>, PathRejection>) -> AppResult<DbId> {
    path.map(|Path(id)| id)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}

/// Decode a JSON body, reporting a malformed one as 400.
fn parse_body(body: &Bytes) -> AppResult<CustomerInput> {
    serde_json::from_slice(body).map_err(|e| AppError::BadRequest(e.to_string()))
}

/// GET /customers
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Customer>>> {
    let customers = CustomerRepo::list(&state.pool).await?;
    tracing::debug!(count = customers.len(), "Listed customers");
    Ok(Json(customers))
}

/// GET /customers/{id}
///
/// An unknown id answers 200 with an empty object rather than 404.
pub async fn get_by_id(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<Response> {
    let id = parse_id(path)?;
    let response = match CustomerRepo::find_by_id(&state.pool, id).await? {
        Some(customer) => Json(customer).into_response(),
        None => Json(serde_json::json!({})).into_response(),
    };
    Ok(response)
}

/// POST /customers
pub async fn create(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<(StatusCode, Json<Customer>)> {
    let input = parse_body(&body)?;
    let customer = CustomerRepo::create(&state.pool, &input).await?;
    tracing::info!(id = customer.id, "Customer created");
    Ok((StatusCode::CREATED, Json(customer)))
}

/// PUT /customers/{id}
///
/// Replaces name, email and status. The response echoes the submitted
/// fields with `id` taken from the path.
pub async fn update(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
    body: Bytes,
) -> AppResult<Json<Customer>> {
    let id = parse_id(path)?;
    let input = parse_body(&body)?;

    let affected = CustomerRepo::update(&state.pool, id, &input).await?;
    if affected == 0 {
        return Err(AppError::Core(CoreError::NoRowsAffected));
    }

    tracing::info!(id, "Customer updated");
    Ok(Json(input.into_customer(id)))
}

/// DELETE /customers/{id}
///
/// Unlike the other routes, a malformed id is reported as 500.
pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<MessageResponse>> {
    let Path(id) = path.map_err(|rejection| AppError::InternalError(rejection.body_text()))?;

    let affected = CustomerRepo::delete(&state.pool, id).await?;
    if affected == 0 {
        return Err(AppError::Core(CoreError::NoRowsAffected));
    }

    tracing::info!(id, "Customer deleted");
    Ok(Json(MessageResponse {
        message: "customer deleted",
    }))
}
