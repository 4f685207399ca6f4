use actix_web::{web, HttpResponse};
use serde_json::json;

use super::error::{ApiError, ApiResult};
use super::state::ApiState;
use crate::metrics;

/// Información general del servicio
pub async fn root() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "mensaje": "API Generador de Facturas",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "generar_factura": "/api/factura/{numero_factura}",
            "salud": "/health",
            "metricas": "/metrics"
        }
    }))
}

/// Genera una factura con datos sintéticos para el número dado
pub async fn generate_invoice(
    path: web::Path<String>,
    state: web::Data<ApiState>,
) -> ApiResult<HttpResponse> {
    let invoice_number = path.into_inner();

    let invoice = state.generator.generate(&invoice_number);
    invoice.validate().map_err(|e| {
        tracing::error!(numero_factura = %invoice_number, error = %e, "Factura invalida");
        ApiError::generation(e)
    })?;

    metrics::INVOICES_GENERATED_TOTAL.inc();
    tracing::info!(
        numero_factura = %invoice_number,
        productos = invoice.items.len(),
        total = invoice.total,
        "Factura generada"
    );

    Ok(HttpResponse::Ok().json(invoice))
}

pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "servicio": "backend-api"
    }))
}

pub async fn metrics_endpoint() -> ApiResult<HttpResponse> {
    let buffer = metrics::gather_text()?;

    Ok(HttpResponse::Ok()
        .content_type("text/plain; version=0.0.4")
        .body(buffer))
}
