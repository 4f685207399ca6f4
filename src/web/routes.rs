use actix_web::web;

use super::handlers;
use crate::api::handlers::metrics_endpoint;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(handlers::index))
        .route("/health", web::get().to(handlers::health_check))
        .route("/metrics", web::get().to(metrics_endpoint))
        .service(
            web::scope("/api")
                .route(
                    "/obtener-factura/{numero_factura}",
                    web::get().to(handlers::fetch_invoice),
                )
                .route(
                    "/generar-pdf/{numero_factura}",
                    web::get().to(handlers::generate_pdf),
                ),
        );
}
