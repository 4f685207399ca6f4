//! Métricas Prometheus de ambos servicios.

use once_cell::sync::Lazy;
use prometheus::{register_int_counter, register_int_counter_vec, Encoder, IntCounter, IntCounterVec, TextEncoder};

/// Facturas sintéticas generadas.
pub static INVOICES_GENERATED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "facturas_generadas_total",
        "Total de facturas sinteticas generadas"
    )
    .expect("Failed to register facturas_generadas_total")
});

/// Consultas al servicio generador por resultado (ok, error).
pub static BACKEND_FETCH_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "consultas_backend_total",
        "Total de consultas al servicio generador por resultado",
        &["resultado"]
    )
    .expect("Failed to register consultas_backend_total")
});

/// Renderizados de PDF por resultado (ok, error).
pub static PDF_RENDER_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "pdf_generados_total",
        "Total de PDFs de factura generados por resultado",
        &["resultado"]
    )
    .expect("Failed to register pdf_generados_total")
});

pub fn outcome<T, E>(result: &Result<T, E>) -> &'static str {
    if result.is_ok() {
        "ok"
    } else {
        "error"
    }
}

/// Codifica el registro por defecto en el formato de texto de Prometheus.
pub fn gather_text() -> anyhow::Result<Vec<u8>> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    Ok(buffer)
}
