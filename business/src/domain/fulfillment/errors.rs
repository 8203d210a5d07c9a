#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum FulfillmentError {
    #[error("fulfillment.empty_fulfillable_set")]
    EmptyFulfillableSet,
}
