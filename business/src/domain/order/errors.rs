#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("order.not_found")]
    NotFound,
    #[error("order.empty")]
    EmptyOrder,
    #[error("order.invalid_quantity")]
    InvalidQuantity,
    #[error("order.invalid_history")]
    InvalidHistory,
    #[error("order.terminal_state_reached")]
    TerminalStateReached,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
