#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum DeliverySlotError {
    #[error("delivery_slot.not_found")]
    SlotNotFound,
    #[error("delivery_slot.unavailable")]
    SlotUnavailable,
    #[error("delivery_slot.invalid_capacity")]
    InvalidCapacity,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
