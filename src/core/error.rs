use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Error de E/S: {0}")]
    Io(#[from] std::io::Error),

    #[error("Error de generación: {0}")]
    Generation(String),

    #[error("Error de plantilla: {0}")]
    Template(String),

    #[error("Error de validación: {0}")]
    Validation(String),
}

impl From<tokio::task::JoinError> for DocumentError {
    fn from(error: tokio::task::JoinError) -> Self {
        DocumentError::Generation(error.to_string())
    }
}

impl From<minijinja::Error> for DocumentError {
    fn from(error: minijinja::Error) -> Self {
        DocumentError::Template(error.to_string())
    }
}

pub type DocumentResult<T> = Result<T, DocumentError>;
