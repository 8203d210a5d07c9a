use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::delivery_slot::errors::DeliverySlotError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for DeliverySlotError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            DeliverySlotError::SlotNotFound => (
                StatusCode::NOT_FOUND,
                "NotFound",
                "delivery_slot.not_found",
            ),
            DeliverySlotError::SlotUnavailable => (
                StatusCode::CONFLICT,
                "ConflictError",
                "delivery_slot.unavailable",
            ),
            DeliverySlotError::InvalidCapacity | DeliverySlotError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        ErrorResponse::with_status(status, name, message)
    }
}
