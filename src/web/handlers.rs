use actix_web::http::header::{
    Charset, ContentDisposition, DispositionParam, DispositionType, ExtendedValue,
};
use actix_web::{web, HttpResponse};
use serde_json::json;

use super::state::WebState;
use crate::api::{ApiError, ApiResult};
use crate::metrics;

/// Página principal
pub async fn index(state: web::Data<WebState>) -> ApiResult<HttpResponse> {
    let html = state.index_page.render()?;

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html))
}

/// Consulta el backend y reenvía la factura tal cual
pub async fn fetch_invoice(
    path: web::Path<String>,
    state: web::Data<WebState>,
) -> ApiResult<HttpResponse> {
    let invoice_number = path.into_inner();

    let result = state.source.fetch_invoice(&invoice_number).await;
    metrics::BACKEND_FETCH_TOTAL
        .with_label_values(&[metrics::outcome(&result)])
        .inc();

    let document = result.map_err(|e| {
        tracing::error!(numero_factura = %invoice_number, error = %e, "Error al consultar el backend");
        ApiError::from(e)
    })?;

    Ok(HttpResponse::Ok().json(document))
}

/// Genera el PDF de una factura
pub async fn generate_pdf(
    path: web::Path<String>,
    state: web::Data<WebState>,
) -> ApiResult<HttpResponse> {
    let invoice_number = path.into_inner();

    let fetched = state.source.fetch_invoice(&invoice_number).await;
    metrics::BACKEND_FETCH_TOTAL
        .with_label_values(&[metrics::outcome(&fetched)])
        .inc();
    let document = fetched.map_err(|e| {
        tracing::error!(numero_factura = %invoice_number, error = %e, "Error al consultar el backend");
        ApiError::from(e)
    })?;

    let rendered = state.pdf_generator.render(&document).await;
    metrics::PDF_RENDER_TOTAL
        .with_label_values(&[metrics::outcome(&rendered)])
        .inc();
    let pdf = rendered.map_err(|e| {
        tracing::error!(numero_factura = %invoice_number, error = %e, "Error al generar PDF");
        ApiError::rendering(e)
    })?;

    tracing::info!(numero_factura = %invoice_number, bytes = pdf.len(), "PDF generado");

    Ok(HttpResponse::Ok()
        .content_type("application/pdf")
        .insert_header(pdf_disposition(&invoice_number))
        .body(pdf))
}

/// Adjunto `factura_<numero>.pdf`. Los caracteres de control se reemplazan;
/// un nombre no ASCII va en `filename*` (UTF-8) con `filename` ASCII de respaldo.
fn pdf_disposition(invoice_number: &str) -> ContentDisposition {
    let file_name: String = format!("factura_{}.pdf", invoice_number)
        .chars()
        .map(|c| if c.is_control() { '_' } else { c })
        .collect();

    let parameters = if file_name.is_ascii() {
        vec![DispositionParam::Filename(file_name)]
    } else {
        let fallback = file_name
            .chars()
            .map(|c| if c.is_ascii() { c } else { '_' })
            .collect();
        vec![
            DispositionParam::Filename(fallback),
            DispositionParam::FilenameExt(ExtendedValue {
                charset: Charset::Ext("UTF-8".to_string()),
                language_tag: None,
                value: file_name.into_bytes(),
            }),
        ]
    };

    ContentDisposition {
        disposition: DispositionType::Attachment,
        parameters,
    }
}

pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "servicio": "frontend-web"
    }))
}
