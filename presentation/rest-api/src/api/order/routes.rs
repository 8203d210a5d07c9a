use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::order::use_cases::advance::{AdvanceOrderParams, AdvanceOrderUseCase};
use business::domain::order::use_cases::get_all::GetAllOrdersUseCase;
use business::domain::order::use_cases::get_by_id::{GetOrderByIdParams, GetOrderByIdUseCase};
use business::domain::order::use_cases::get_history::{
    GetOrderHistoryParams, GetOrderHistoryUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::order::dto::{OrderHistoryResponse, OrderResponse};
use crate::api::tags::ApiTags;

pub struct OrderApi {
    get_all_use_case: Arc<dyn GetAllOrdersUseCase>,
    get_by_id_use_case: Arc<dyn GetOrderByIdUseCase>,
    advance_use_case: Arc<dyn AdvanceOrderUseCase>,
    get_history_use_case: Arc<dyn GetOrderHistoryUseCase>,
}

impl OrderApi {
    pub fn new(
        get_all_use_case: Arc<dyn GetAllOrdersUseCase>,
        get_by_id_use_case: Arc<dyn GetOrderByIdUseCase>,
        advance_use_case: Arc<dyn AdvanceOrderUseCase>,
        get_history_use_case: Arc<dyn GetOrderHistoryUseCase>,
    ) -> Self {
        Self {
            get_all_use_case,
            get_by_id_use_case,
            advance_use_case,
            get_history_use_case,
        }
    }
}

/// Order lifecycle API
#[OpenApi]
impl OrderApi {
    /// List orders, newest first
    #[oai(path = "/orders", method = "get", tag = "ApiTags::Orders")]
    async fn get_all_orders(&self) -> GetAllOrdersResponse {
        match self.get_all_use_case.execute().await {
            Ok(orders) => {
                GetAllOrdersResponse::Ok(Json(orders.into_iter().map(Into::into).collect()))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllOrdersResponse::InternalError(json)
            }
        }
    }

    /// Get an order by number
    #[oai(path = "/orders/:id", method = "get", tag = "ApiTags::Orders")]
    async fn get_order_by_id(&self, id: Path<u64>) -> GetOrderResponse {
        match self
            .get_by_id_use_case
            .execute(GetOrderByIdParams { id: id.0 })
            .await
        {
            Ok(order) => GetOrderResponse::Ok(Json(order.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetOrderResponse::NotFound(json),
                    _ => GetOrderResponse::InternalError(json),
                }
            }
        }
    }

    /// Move an order to its next state
    ///
    /// Fails with 409 once the order is delivered.
    #[oai(path = "/orders/:id/advance", method = "post", tag = "ApiTags::Orders")]
    async fn advance_order(&self, id: Path<u64>) -> AdvanceOrderResponse {
        match self
            .advance_use_case
            .execute(AdvanceOrderParams { id: id.0 })
            .await
        {
            Ok(order) => AdvanceOrderResponse::Ok(Json(order.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => AdvanceOrderResponse::NotFound(json),
                    409 => AdvanceOrderResponse::Conflict(json),
                    _ => AdvanceOrderResponse::InternalError(json),
                }
            }
        }
    }

    /// Status timeline of an order
    ///
    /// Lists every lifecycle state with its label, hint and, for states
    /// already reached, the time the order entered it.
    #[oai(path = "/orders/:id/history", method = "get", tag = "ApiTags::Orders")]
    async fn get_order_history(&self, id: Path<u64>) -> GetOrderHistoryResponse {
        match self
            .get_history_use_case
            .execute(GetOrderHistoryParams { id: id.0 })
            .await
        {
            Ok(history) => GetOrderHistoryResponse::Ok(Json(history.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetOrderHistoryResponse::NotFound(json),
                    _ => GetOrderHistoryResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllOrdersResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<OrderResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetOrderResponse {
    #[oai(status = 200)]
    Ok(Json<OrderResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum AdvanceOrderResponse {
    #[oai(status = 200)]
    Ok(Json<OrderResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetOrderHistoryResponse {
    #[oai(status = 200)]
    Ok(Json<OrderHistoryResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
