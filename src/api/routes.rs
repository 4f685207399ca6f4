use actix_cors::Cors;
use actix_web::{middleware, web};

use super::handlers;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg
        // Health checks
        .route("/", web::get().to(handlers::root))
        .route("/health", web::get().to(handlers::health_check))
        .route("/metrics", web::get().to(handlers::metrics_endpoint))

        // Generación de facturas
        .service(
            web::scope("/api")
                .wrap(middleware::Compress::default())
                .route("/factura/{numero_factura}", web::get().to(handlers::generate_invoice)),
        );
}

/// CORS para los orígenes configurados del servicio de presentación.
pub fn create_cors(origins: &[String]) -> Cors {
    origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
        .max_age(3600)
}
