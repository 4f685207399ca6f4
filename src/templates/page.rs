use minijinja::{context, Environment};

use super::helpers::percentage_filter;
use crate::core::DocumentResult;
use crate::models::TAX_RATE;

const INDEX_TEMPLATE: &str = include_str!("index.html");

/// Página principal del servicio de presentación.
pub struct IndexPage {
    env: Environment<'static>,
}

impl IndexPage {
    pub fn new() -> DocumentResult<Self> {
        let mut env = Environment::new();
        env.add_filter("porcentaje", percentage_filter);
        env.add_template("index.html", INDEX_TEMPLATE)?;

        Ok(IndexPage { env })
    }

    pub fn render(&self) -> DocumentResult<String> {
        let template = self.env.get_template("index.html")?;

        let html = template.render(context! {
            titulo => "Generador de Facturas",
            ejemplo_numero => "FAC-2025-001",
            tasa_impuesto => TAX_RATE,
            ruta_factura => "/api/obtener-factura/",
            ruta_pdf => "/api/generar-pdf/",
        })?;

        Ok(html)
    }
}
