use actix_web::{middleware, web, App, HttpServer};
use anyhow::Result;
use factura_generator::api::{configure_routes, create_cors, ApiState, AppConfig};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info"))
        )
        .init();

    tracing::info!("Starting API Generador de Facturas");

    // Initialize Prometheus metrics
    prometheus::default_registry()
        .register(Box::new(prometheus::process_collector::ProcessCollector::for_self()))?;

    let config = AppConfig::from_env()?;
    let state = web::Data::new(ApiState::new());

    tracing::info!("Starting server on {}:{}", config.host, config.port);

    let origins = config.cors_origins.clone();
    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(create_cors(&origins))
            .wrap(TracingLogger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    Ok(())
}
