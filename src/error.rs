use crate::config::ConfigurationError;
use crate::gateway::error::GatewayError;
use thiserror::Error;

pub type Result<T, E = ApplicationError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("The document store configuration is invalid.")]
    Configuration(#[from] ConfigurationError),
    #[error("An error has been encountered while querying the document store.")]
    Gateway(#[from] GatewayError),
}
