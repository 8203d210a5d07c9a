#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.session_blank")]
    SessionBlank,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
