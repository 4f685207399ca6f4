use anyhow::Context;
use std::env;
use std::sync::Arc;

use crate::generators::InvoiceGenerator;

#[derive(Clone)]
pub struct ApiState {
    pub generator: Arc<InvoiceGenerator>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            host: "0.0.0.0".to_string(),
            port: 8000,
            cors_origins: vec![
                "http://localhost:3000".to_string(),
                "http://frontend:3000".to_string(),
            ],
        }
    }
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let default = AppConfig::default();

        let port = match env::var("PORT") {
            Ok(port) => port
                .parse::<u16>()
                .with_context(|| format!("PORT invalido: {}", port))?,
            Err(_) => default.port,
        };

        let cors_origins = match env::var("CORS_ORIGINS") {
            Ok(origins) => parse_origins(&origins),
            Err(_) => default.cors_origins,
        };

        Ok(AppConfig {
            host: env::var("HOST").unwrap_or(default.host),
            port,
            cors_origins,
        })
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

impl Default for ApiState {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiState {
    pub fn new() -> Self {
        ApiState {
            generator: Arc::new(InvoiceGenerator::new()),
        }
    }
}
