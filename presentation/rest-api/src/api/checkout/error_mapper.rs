use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::checkout::errors::CheckoutError;
use business::domain::fulfillment::errors::FulfillmentError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CheckoutError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match self {
            CheckoutError::DeliverySlot(err) => return err.into_error_response(),
            CheckoutError::Order(err) => return err.into_error_response(),
            CheckoutError::SessionBlank => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "checkout.session_blank",
            ),
            CheckoutError::BelowMinimumAmount { .. } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "CheckoutError",
                "checkout.below_minimum_amount",
            ),
            CheckoutError::Fulfillment(FulfillmentError::EmptyFulfillableSet) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "CheckoutError",
                "fulfillment.empty_fulfillable_set",
            ),
            CheckoutError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        ErrorResponse::with_status(status, name, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::delivery_slot::errors::DeliverySlotError;
    use business::domain::order::errors::OrderError;

    #[test]
    fn should_map_nothing_to_ship_to_422() {
        let (status, json) =
            CheckoutError::from(FulfillmentError::EmptyFulfillableSet).into_error_response();

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json.0.message, "fulfillment.empty_fulfillable_set");
    }

    #[test]
    fn should_map_below_minimum_to_422() {
        let (status, json) = CheckoutError::BelowMinimumAmount {
            total: 42500,
            minimum: 50000,
        }
        .into_error_response();

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json.0.message, "checkout.below_minimum_amount");
    }

    #[test]
    fn should_delegate_slot_errors() {
        let (unavailable, _) =
            CheckoutError::from(DeliverySlotError::SlotUnavailable).into_error_response();
        let (missing, _) =
            CheckoutError::from(DeliverySlotError::SlotNotFound).into_error_response();

        assert_eq!(unavailable, StatusCode::CONFLICT);
        assert_eq!(missing, StatusCode::NOT_FOUND);
    }

    #[test]
    fn should_delegate_order_errors() {
        let (status, _) = CheckoutError::from(OrderError::EmptyOrder).into_error_response();
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
