use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::cart::errors::CartError;
use business::domain::cart::model::CartSummary;
use business::domain::cart::use_cases::add_item::{AddCartItemParams, AddCartItemUseCase};
use business::domain::cart::use_cases::get::{GetCartParams, GetCartUseCase};
use business::domain::cart::use_cases::remove_item::{RemoveCartItemParams, RemoveCartItemUseCase};
use business::domain::cart::use_cases::set_quantity::{
    SetCartItemQuantityParams, SetCartItemQuantityUseCase,
};
use business::domain::shared::value_objects::SessionId;

use crate::api::cart::dto::{AddCartItemRequest, CartResponse, SetCartItemQuantityRequest};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CartApi {
    get_use_case: Arc<dyn GetCartUseCase>,
    add_item_use_case: Arc<dyn AddCartItemUseCase>,
    set_quantity_use_case: Arc<dyn SetCartItemQuantityUseCase>,
    remove_item_use_case: Arc<dyn RemoveCartItemUseCase>,
}

impl CartApi {
    pub fn new(
        get_use_case: Arc<dyn GetCartUseCase>,
        add_item_use_case: Arc<dyn AddCartItemUseCase>,
        set_quantity_use_case: Arc<dyn SetCartItemQuantityUseCase>,
        remove_item_use_case: Arc<dyn RemoveCartItemUseCase>,
    ) -> Self {
        Self {
            get_use_case,
            add_item_use_case,
            set_quantity_use_case,
            remove_item_use_case,
        }
    }
}

/// Session cart API
///
/// Each session id addresses its own cart.
#[OpenApi]
impl CartApi {
    /// Get the cart of a session
    #[oai(path = "/sessions/:session_id/cart", method = "get", tag = "ApiTags::Cart")]
    async fn get_cart(&self, session_id: Path<String>) -> CartResponseEnvelope {
        let result = self
            .get_use_case
            .execute(GetCartParams {
                session_id: SessionId::from(session_id.0),
            })
            .await;
        CartResponseEnvelope::from_result(result)
    }

    /// Add one unit of a product
    ///
    /// Inserts the product with quantity 1 or increments its line.
    #[oai(
        path = "/sessions/:session_id/cart/items",
        method = "post",
        tag = "ApiTags::Cart"
    )]
    async fn add_item(
        &self,
        session_id: Path<String>,
        body: Json<AddCartItemRequest>,
    ) -> CartResponseEnvelope {
        let result = self
            .add_item_use_case
            .execute(AddCartItemParams {
                session_id: SessionId::from(session_id.0),
                product_id: body.0.product_id,
            })
            .await;
        CartResponseEnvelope::from_result(result)
    }

    /// Set the quantity of a line
    #[oai(
        path = "/sessions/:session_id/cart/items/:product_id",
        method = "put",
        tag = "ApiTags::Cart"
    )]
    async fn set_quantity(
        &self,
        session_id: Path<String>,
        product_id: Path<u32>,
        body: Json<SetCartItemQuantityRequest>,
    ) -> CartResponseEnvelope {
        let result = self
            .set_quantity_use_case
            .execute(SetCartItemQuantityParams {
                session_id: SessionId::from(session_id.0),
                product_id: product_id.0,
                quantity: body.0.quantity,
            })
            .await;
        CartResponseEnvelope::from_result(result)
    }

    /// Remove a line
    #[oai(
        path = "/sessions/:session_id/cart/items/:product_id",
        method = "delete",
        tag = "ApiTags::Cart"
    )]
    async fn remove_item(
        &self,
        session_id: Path<String>,
        product_id: Path<u32>,
    ) -> CartResponseEnvelope {
        let result = self
            .remove_item_use_case
            .execute(RemoveCartItemParams {
                session_id: SessionId::from(session_id.0),
                product_id: product_id.0,
            })
            .await;
        CartResponseEnvelope::from_result(result)
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CartResponseEnvelope {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl CartResponseEnvelope {
    fn from_result(result: Result<CartSummary, CartError>) -> Self {
        match result {
            Ok(summary) => CartResponseEnvelope::Ok(Json(summary.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CartResponseEnvelope::BadRequest(json),
                    _ => CartResponseEnvelope::InternalError(json),
                }
            }
        }
    }
}
