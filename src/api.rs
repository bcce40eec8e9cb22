// Employee Service - HTTP binding
//
// Routes (all under /api):
//   POST   /employees       -> 201 + employee
//   GET    /employees       -> 200 + [employee]
//   GET    /employees/:id   -> 200 + employee | 404
//   PUT    /employees/:id   -> 200 + employee | 404
//   DELETE /employees/:id   -> 204
//   GET    /health          -> 200

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use futures::TryStreamExt;
use serde::Serialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::dto::EmployeeDto;
use crate::error::{Error, Result};
use crate::service::EmployeeService;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    service: Arc<EmployeeService>,
}

/// Build the API router around a ready service
pub fn router(service: EmployeeService) -> Router {
    let state = AppState {
        service: Arc::new(service),
    };

    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/employees", get(get_all_employees).post(save_employee))
        .route(
            "/employees/:id",
            get(get_employee).put(update_employee).delete(delete_employee),
        )
        .with_state(state);

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
}

// ============================================================================
// Error responses
// ============================================================================

/// `{"error": {"message": ..., "type": ...}}`
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Debug, Serialize)]
struct ErrorDetail {
    message: String,
    #[serde(rename = "type")]
    error_type: &'static str,
}

impl ErrorResponse {
    fn new(message: impl Into<String>, error_type: &'static str) -> Self {
        Self {
            error: ErrorDetail {
                message: message.into(),
                error_type,
            },
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Error::NotFound { .. } => (
                StatusCode::NOT_FOUND,
                ErrorResponse::new(self.to_string(), "not_found"),
            ),
            Error::InvalidRequest { .. } => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new(self.to_string(), "invalid_request_error"),
            ),
            // Store details stay in the log
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new("employee store unavailable", "store_error"),
            ),
        };

        if self.is_client_error() {
            tracing::warn!(error = %self, "request rejected");
        } else {
            tracing::error!(error = %self, "request failed");
        }

        (status, Json(body)).into_response()
    }
}

/// Any body rejection (syntax, missing field, content type) is a 400
fn read_body(payload: std::result::Result<Json<EmployeeDto>, JsonRejection>) -> Result<EmployeeDto> {
    payload
        .map(|Json(dto)| dto)
        .map_err(|rejection| Error::invalid_request(rejection.body_text()))
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/health - Liveness probe
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

/// POST /api/employees - Create an employee
async fn save_employee(
    State(state): State<AppState>,
    payload: std::result::Result<Json<EmployeeDto>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let dto = read_body(payload)?;
    let saved = state.service.save_employee(dto).await?;

    Ok((StatusCode::CREATED, Json(saved)))
}

/// GET /api/employees/:id - Fetch one employee
async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<EmployeeDto>> {
    state
        .service
        .get_employee(&id)
        .await?
        .map(Json)
        .ok_or_else(|| Error::not_found(id))
}

/// GET /api/employees - Fetch every employee
async fn get_all_employees(State(state): State<AppState>) -> Result<Json<Vec<EmployeeDto>>> {
    let employees: Vec<EmployeeDto> = state.service.get_all_employees().try_collect().await?;

    Ok(Json(employees))
}

/// PUT /api/employees/:id - Replace the values of an existing employee
async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: std::result::Result<Json<EmployeeDto>, JsonRejection>,
) -> Result<Json<EmployeeDto>> {
    let dto = read_body(payload)?;

    state
        .service
        .update_employee(dto, &id)
        .await?
        .map(Json)
        .ok_or_else(|| Error::not_found(id))
}

/// DELETE /api/employees/:id - Remove an employee (idempotent)
async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    state.service.delete_employee(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}
