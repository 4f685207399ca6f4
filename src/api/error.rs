use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use std::fmt;

use crate::core::DocumentError;
use crate::web::client::FetchError;

#[derive(Debug)]
pub struct ApiError {
    message: String,
    status_code: StatusCode,
}

impl ApiError {
    pub fn new(message: impl Into<String>, status_code: StatusCode) -> Self {
        ApiError {
            message: message.into(),
            status_code,
        }
    }

    pub fn internal_server_error(message: impl Into<String>) -> Self {
        Self::new(message, StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Falla al generar la factura en el servicio generador.
    pub fn generation(err: impl fmt::Display) -> Self {
        Self::internal_server_error(format!("Error al generar factura: {}", err))
    }

    /// Falla al renderizar el PDF en el servicio de presentación.
    pub fn rendering(err: impl fmt::Display) -> Self {
        Self::internal_server_error(format!("Error al generar PDF: {}", err))
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code).json(serde_json::json!({
            "error": self.message,
            "status": self.status_code.as_u16()
        }))
    }

    fn status_code(&self) -> StatusCode {
        self.status_code
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::internal_server_error(err.to_string())
    }
}

impl From<DocumentError> for ApiError {
    fn from(err: DocumentError) -> Self {
        ApiError::internal_server_error(err.to_string())
    }
}

impl From<FetchError> for ApiError {
    fn from(err: FetchError) -> Self {
        ApiError::internal_server_error(format!("Error al conectar con el backend: {}", err))
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
