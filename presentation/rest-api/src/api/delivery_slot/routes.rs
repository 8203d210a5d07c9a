use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::delivery_slot::use_cases::list::ListDeliverySlotsUseCase;

use crate::api::delivery_slot::dto::DeliverySlotResponse;
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct DeliverySlotApi {
    list_use_case: Arc<dyn ListDeliverySlotsUseCase>,
}

impl DeliverySlotApi {
    pub fn new(list_use_case: Arc<dyn ListDeliverySlotsUseCase>) -> Self {
        Self { list_use_case }
    }
}

#[OpenApi]
impl DeliverySlotApi {
    /// List shipment days
    ///
    /// Full days are listed too, flagged as not selectable.
    #[oai(path = "/delivery-slots", method = "get", tag = "ApiTags::DeliverySlots")]
    async fn list_delivery_slots(&self) -> ListDeliverySlotsResponse {
        match self.list_use_case.execute().await {
            Ok(offers) => ListDeliverySlotsResponse::Ok(Json(
                offers.into_iter().map(DeliverySlotResponse::from).collect(),
            )),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ListDeliverySlotsResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListDeliverySlotsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<DeliverySlotResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
