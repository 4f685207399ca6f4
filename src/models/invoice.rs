use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Category;
use crate::core::{DocumentError, DocumentResult};

/// Tasa de IVA aplicada al subtotal.
pub const TAX_RATE: f64 = 0.19;

/// Empresa emisora de la factura.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "direccion")]
    pub address: String,
    #[serde(rename = "telefono")]
    pub phone: String,
    pub email: String,
}

/// Cliente que recibe la factura.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "direccion")]
    pub address: String,
    #[serde(rename = "telefono")]
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(rename = "producto")]
    pub product: String,
    #[serde(rename = "categoria")]
    pub category: Category,
    #[serde(rename = "cantidad")]
    pub quantity: u32,
    #[serde(rename = "precio_unitario")]
    pub unit_price: f64,
}

impl LineItem {
    pub fn subtotal(&self) -> f64 {
        f64::from(self.quantity) * self.unit_price
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvoiceTotals {
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
}

impl InvoiceTotals {
    /// El impuesto se redondea a dos decimales; subtotal y total no.
    pub fn from_items(items: &[LineItem]) -> Self {
        let subtotal: f64 = items.iter().map(LineItem::subtotal).sum();
        let tax = round_to(subtotal * TAX_RATE, 2);

        InvoiceTotals {
            subtotal,
            tax,
            total: subtotal + tax,
        }
    }
}

pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    #[serde(rename = "numero_factura")]
    pub number: String,
    #[serde(rename = "fecha_emision")]
    pub issue_date: NaiveDate,
    #[serde(rename = "empresa")]
    pub company: Company,
    #[serde(rename = "cliente")]
    pub client: Client,
    #[serde(rename = "detalle")]
    pub items: Vec<LineItem>,
    pub subtotal: f64,
    #[serde(rename = "impuesto")]
    pub tax: f64,
    pub total: f64,
}

impl Invoice {
    pub fn new(
        number: String,
        issue_date: NaiveDate,
        company: Company,
        client: Client,
        items: Vec<LineItem>,
    ) -> Self {
        let totals = InvoiceTotals::from_items(&items);

        Invoice {
            number,
            issue_date,
            company,
            client,
            items,
            subtotal: totals.subtotal,
            tax: totals.tax,
            total: totals.total,
        }
    }

    pub fn totals(&self) -> InvoiceTotals {
        InvoiceTotals {
            subtotal: self.subtotal,
            tax: self.tax,
            total: self.total,
        }
    }

    pub fn validate(&self) -> DocumentResult<()> {
        if self.items.is_empty() {
            return Err(DocumentError::Validation(
                "La factura debe tener al menos un producto".to_string(),
            ));
        }

        for item in &self.items {
            if item.quantity == 0 {
                return Err(DocumentError::Validation(format!(
                    "Cantidad invalida para {}: debe ser mayor que 0",
                    item.product
                )));
            }
            if !(item.unit_price > 0.0) {
                return Err(DocumentError::Validation(format!(
                    "Precio unitario invalido para {}: {}",
                    item.product, item.unit_price
                )));
            }
        }

        for (field, value) in [
            ("subtotal", self.subtotal),
            ("impuesto", self.tax),
            ("total", self.total),
        ] {
            if !(value >= 0.0) {
                return Err(DocumentError::Validation(format!(
                    "El campo {} no puede ser negativo: {}",
                    field, value
                )));
            }
        }

        Ok(())
    }
}
