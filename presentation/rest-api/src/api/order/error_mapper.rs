use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::order::errors::OrderError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for OrderError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            OrderError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "order.not_found"),
            OrderError::EmptyOrder => (StatusCode::BAD_REQUEST, "ValidationError", "order.empty"),
            OrderError::InvalidQuantity => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "order.invalid_quantity",
            ),
            OrderError::TerminalStateReached => (
                StatusCode::CONFLICT,
                "ConflictError",
                "order.terminal_state_reached",
            ),
            OrderError::InvalidHistory | OrderError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        ErrorResponse::with_status(status, name, message)
    }
}
