use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::checkout::use_cases::check_availability::{
    CheckAvailabilityParams, CheckAvailabilityUseCase,
};
use business::domain::checkout::use_cases::confirm::{ConfirmOrderParams, ConfirmOrderUseCase};
use business::domain::shared::value_objects::SessionId;

use crate::api::checkout::dto::{AvailabilityResponse, ConfirmOrderRequest, OrderConfirmationResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CheckoutApi {
    check_availability_use_case: Arc<dyn CheckAvailabilityUseCase>,
    confirm_use_case: Arc<dyn ConfirmOrderUseCase>,
}

impl CheckoutApi {
    pub fn new(
        check_availability_use_case: Arc<dyn CheckAvailabilityUseCase>,
        confirm_use_case: Arc<dyn ConfirmOrderUseCase>,
    ) -> Self {
        Self {
            check_availability_use_case,
            confirm_use_case,
        }
    }
}

/// Checkout API
///
/// Two steps: preview the in-stock / back-order split, then confirm with a
/// delivery day.
#[OpenApi]
impl CheckoutApi {
    /// Preview availability of the session cart
    #[oai(
        path = "/sessions/:session_id/checkout/availability",
        method = "post",
        tag = "ApiTags::Checkout"
    )]
    async fn check_availability(&self, session_id: Path<String>) -> CheckAvailabilityResponse {
        match self
            .check_availability_use_case
            .execute(CheckAvailabilityParams {
                session_id: SessionId::from(session_id.0),
            })
            .await
        {
            Ok(check) => CheckAvailabilityResponse::Ok(Json(check.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CheckAvailabilityResponse::BadRequest(json),
                    _ => CheckAvailabilityResponse::InternalError(json),
                }
            }
        }
    }

    /// Confirm the order
    ///
    /// Creates an order from the in-stock lines, returns the back-ordered
    /// remainder if any and empties the cart.
    #[oai(
        path = "/sessions/:session_id/checkout/confirm",
        method = "post",
        tag = "ApiTags::Checkout"
    )]
    async fn confirm_order(
        &self,
        session_id: Path<String>,
        body: Json<ConfirmOrderRequest>,
    ) -> ConfirmOrderResponse {
        match self
            .confirm_use_case
            .execute(ConfirmOrderParams {
                session_id: SessionId::from(session_id.0),
                delivery_date: body.0.delivery_date,
            })
            .await
        {
            Ok(confirmation) => ConfirmOrderResponse::Created(Json(confirmation.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => ConfirmOrderResponse::BadRequest(json),
                    404 => ConfirmOrderResponse::NotFound(json),
                    409 => ConfirmOrderResponse::Conflict(json),
                    422 => ConfirmOrderResponse::UnprocessableEntity(json),
                    _ => ConfirmOrderResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CheckAvailabilityResponse {
    #[oai(status = 200)]
    Ok(Json<AvailabilityResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ConfirmOrderResponse {
    #[oai(status = 201)]
    Created(Json<OrderConfirmationResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
