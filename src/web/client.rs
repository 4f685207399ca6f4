use async_trait::async_trait;
use reqwest::Url;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("URL del backend invalida: {0}")]
    InvalidUrl(String),

    #[error(transparent)]
    Request(#[from] reqwest::Error),
}

/// Origen de los documentos de factura que consume el servicio de presentación.
#[async_trait]
pub trait InvoiceSource: Send + Sync {
    async fn fetch_invoice(&self, invoice_number: &str) -> Result<Value, FetchError>;
}

/// Cliente HTTP del servicio generador.
#[derive(Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        BackendClient {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn invoice_url(&self, invoice_number: &str) -> Result<Url, FetchError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| FetchError::InvalidUrl(format!("{}: {}", self.base_url, e)))?;

        url.path_segments_mut()
            .map_err(|_| FetchError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(["api", "factura", invoice_number]);

        Ok(url)
    }
}

#[async_trait]
impl InvoiceSource for BackendClient {
    async fn fetch_invoice(&self, invoice_number: &str) -> Result<Value, FetchError> {
        let url = self.invoice_url(invoice_number)?;
        tracing::debug!(%url, "Consultando factura en el backend");

        let document = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await?;

        Ok(document)
    }
}
