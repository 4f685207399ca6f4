use anyhow::Context;
use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use super::client::{BackendClient, InvoiceSource};
use crate::generators::PdfGenerator;
use crate::templates::IndexPage;

#[derive(Clone)]
pub struct WebState {
    pub source: Arc<dyn InvoiceSource>,
    pub pdf_generator: Arc<PdfGenerator>,
    pub index_page: Arc<IndexPage>,
}

#[derive(Debug, Clone)]
pub struct WebConfig {
    pub host: String,
    pub port: u16,
    pub backend_url: String,
    pub typst_bin: String,
    pub temp_dir: PathBuf,
}

impl Default for WebConfig {
    fn default() -> Self {
        WebConfig {
            host: "0.0.0.0".to_string(),
            port: 3000,
            backend_url: "http://localhost:8000".to_string(),
            typst_bin: "typst".to_string(),
            temp_dir: env::temp_dir(),
        }
    }
}

impl WebConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let default = WebConfig::default();

        let port = match env::var("PORT") {
            Ok(port) => port
                .parse::<u16>()
                .with_context(|| format!("PORT invalido: {}", port))?,
            Err(_) => default.port,
        };

        Ok(WebConfig {
            host: env::var("HOST").unwrap_or(default.host),
            port,
            backend_url: env::var("BACKEND_URL").unwrap_or(default.backend_url),
            typst_bin: env::var("TYPST_BIN").unwrap_or(default.typst_bin),
            temp_dir: env::var("TEMP_DIR")
                .map(PathBuf::from)
                .unwrap_or(default.temp_dir),
        })
    }
}

impl WebState {
    pub fn new(config: &WebConfig) -> anyhow::Result<Self> {
        let source = Arc::new(BackendClient::new(config.backend_url.clone()));
        Self::with_source(config, source)
    }

    /// Estado con un origen de facturas explícito.
    pub fn with_source(config: &WebConfig, source: Arc<dyn InvoiceSource>) -> anyhow::Result<Self> {
        let pdf_generator = PdfGenerator::new(config.typst_bin.clone(), config.temp_dir.clone());
        let index_page = IndexPage::new().context("No se pudo cargar la pagina principal")?;

        Ok(WebState {
            source,
            pdf_generator: Arc::new(pdf_generator),
            index_page: Arc::new(index_page),
        })
    }
}
