use crate::domain::shared::value_objects::Amount;

#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    #[error("checkout.session_blank")]
    SessionBlank,
    #[error("checkout.below_minimum_amount")]
    BelowMinimumAmount { total: Amount, minimum: Amount },
    #[error(transparent)]
    Fulfillment(#[from] crate::domain::fulfillment::errors::FulfillmentError),
    #[error(transparent)]
    DeliverySlot(#[from] crate::domain::delivery_slot::errors::DeliverySlotError),
    #[error(transparent)]
    Order(#[from] crate::domain::order::errors::OrderError),
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
