//! Application-level errors (wraps domain errors)

use thiserror::Error;

use crate::domain::DomainError;
use crate::infrastructure::traits::ProviderError;

/// Application errors wrap domain errors and add application-level context.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("generation failed: {context}")]
    Generation {
        context: String,
        #[source]
        source: ProviderError,
    },

    #[error("outline provider returned no sections for {0}")]
    EmptyOutline(String),

    #[error("config error: {message}")]
    Config { message: String },
}

impl ApplicationError {
    pub fn generation(context: impl Into<String>, source: ProviderError) -> Self {
        Self::Generation {
            context: context.into(),
            source,
        }
    }
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
