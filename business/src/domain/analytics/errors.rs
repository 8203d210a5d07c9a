#[derive(Debug, thiserror::Error)]
pub enum AnalyticsError {
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
