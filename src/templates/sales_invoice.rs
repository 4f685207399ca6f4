use serde_json::Value;

use crate::core::{
    ColumnAlign, DocumentError, DocumentResult, Money, RowEmphasis, Stroke, TableData, TableStyle,
};
use crate::models::Invoice;
use crate::pdf::PdfBuilder;
use crate::templates::template_trait::TypstTemplate;

const ACCENT: &str = "#D2691E";
const SUBTITLE: &str = "#8B4513";
const WHEAT: &str = "#F5DEB3";
const MOCCASIN: &str = "#FFE4B5";
const BEIGE: &str = "#F5F5DC";
const WHITESMOKE: &str = "#F5F5F5";
const GREY: &str = "#808080";

const INCH: f32 = 72.0;

const REQUIRED_FIELDS: [&str; 8] = [
    "numero_factura",
    "fecha_emision",
    "empresa",
    "cliente",
    "detalle",
    "subtotal",
    "impuesto",
    "total",
];

/// Factura de venta: encabezado, empresa, cliente, detalle y totales.
pub struct SalesInvoiceTemplate;

impl Default for SalesInvoiceTemplate {
    fn default() -> Self {
        Self::new()
    }
}

impl SalesInvoiceTemplate {
    pub fn new() -> Self {
        Self
    }

    pub fn render_invoice(&self, invoice: &Invoice) -> String {
        let mut builder = PdfBuilder::new();

        builder
            .add_title("FACTURA DE VENTA", 24.0, ACCENT)
            .add_spacing(21.6)
            .add_table(&self.info_table(invoice))
            .add_spacing(21.6)
            .add_subtitle("Datos de la Empresa", 14.0, SUBTITLE)
            .add_table(&self.company_table(invoice))
            .add_spacing(14.4)
            .add_subtitle("Datos del Cliente", 14.0, SUBTITLE)
            .add_table(&self.client_table(invoice))
            .add_spacing(21.6)
            .add_subtitle("Detalle de Productos", 14.0, SUBTITLE)
            .add_table(&self.items_table(invoice))
            .add_spacing(21.6)
            .add_table(&self.totals_table(invoice));

        builder.build()
    }

    fn info_table(&self, invoice: &Invoice) -> TableData {
        let issue_date = invoice.issue_date.format("%Y-%m-%d").to_string();

        TableData::key_value(&[
            ("Numero de Factura:", invoice.number.as_str()),
            ("Fecha de Emision:", issue_date.as_str()),
        ])
        .with_column_widths(vec![2.0 * INCH, 4.0 * INCH])
        .with_alignment(vec![ColumnAlign::Left, ColumnAlign::Left])
        .with_style(TableStyle {
            stroke: Some(Stroke::new(1.0, ACCENT)),
            header_fill: None,
            label_fill: Some(WHEAT.to_string()),
            bold_labels: true,
            font_size: 10.0,
            inset: 8.0,
            ..TableStyle::default()
        })
    }

    fn party_style() -> TableStyle {
        TableStyle {
            stroke: Some(Stroke::new(0.5, GREY)),
            header_fill: None,
            label_fill: Some(MOCCASIN.to_string()),
            bold_labels: true,
            font_size: 9.0,
            inset: 6.0,
            ..TableStyle::default()
        }
    }

    fn company_table(&self, invoice: &Invoice) -> TableData {
        let company = &invoice.company;

        TableData::key_value(&[
            ("Nombre:", company.name.as_str()),
            ("Direccion:", company.address.as_str()),
            ("Telefono:", company.phone.as_str()),
            ("Email:", company.email.as_str()),
        ])
        .with_column_widths(vec![1.5 * INCH, 4.5 * INCH])
        .with_alignment(vec![ColumnAlign::Left, ColumnAlign::Left])
        .with_style(Self::party_style())
    }

    fn client_table(&self, invoice: &Invoice) -> TableData {
        let client = &invoice.client;

        TableData::key_value(&[
            ("Nombre:", client.name.as_str()),
            ("Direccion:", client.address.as_str()),
            ("Telefono:", client.phone.as_str()),
        ])
        .with_column_widths(vec![1.5 * INCH, 4.5 * INCH])
        .with_alignment(vec![ColumnAlign::Left, ColumnAlign::Left])
        .with_style(Self::party_style())
    }

    fn items_table(&self, invoice: &Invoice) -> TableData {
        let headers = ["Producto", "Categoria", "Cantidad", "P. Unitario", "Subtotal"]
            .iter()
            .map(|h| h.to_string())
            .collect();

        let mut table = TableData::new(headers)
            .with_column_widths(vec![2.0 * INCH, 1.3 * INCH, 0.8 * INCH, 1.0 * INCH, 1.0 * INCH])
            .with_alignment(vec![ColumnAlign::Center; 5])
            .with_style(TableStyle {
                stroke: Some(Stroke::new(1.0, SUBTITLE)),
                header_fill: Some(ACCENT.to_string()),
                header_color: Some(WHITESMOKE.to_string()),
                body_fill: Some(BEIGE.to_string()),
                font_size: 9.0,
                inset: 6.0,
                ..TableStyle::default()
            });

        for item in &invoice.items {
            table.add_row(vec![
                item.product.clone(),
                item.category.to_string(),
                item.quantity.to_string(),
                Money::new(item.unit_price).with_decimals(0).format(),
                Money::new(item.subtotal()).with_decimals(0).format(),
            ]);
        }

        table
    }

    fn totals_table(&self, invoice: &Invoice) -> TableData {
        let totals = invoice.totals();
        let subtotal = Money::new(totals.subtotal).format();
        let tax = Money::new(totals.tax).format();
        let total = Money::new(totals.total).format();

        TableData::key_value(&[
            ("Subtotal:", subtotal.as_str()),
            ("Impuesto (IVA 19%):", tax.as_str()),
            ("TOTAL:", total.as_str()),
        ])
        .with_column_widths(vec![4.0 * INCH, 2.0 * INCH])
        .with_alignment(vec![ColumnAlign::Right, ColumnAlign::Right])
        .with_style(TableStyle {
            stroke: None,
            header_fill: None,
            bold_labels: true,
            font_size: 11.0,
            inset: 8.0,
            emphasis: Some(RowEmphasis {
                font_size: 14.0,
                color: ACCENT.to_string(),
                value_fill: Some(MOCCASIN.to_string()),
                rule: Some(Stroke::new(2.0, ACCENT)),
            }),
            ..TableStyle::default()
        })
    }
}

impl TypstTemplate for SalesInvoiceTemplate {
    fn generate(&self, data: &Value) -> DocumentResult<String> {
        let invoice: Invoice = serde_json::from_value(data.clone()).map_err(|e| {
            DocumentError::Template(format!("Error deserializando datos de factura: {}", e))
        })?;

        Ok(self.render_invoice(&invoice))
    }

    fn title(&self, data: &Value) -> String {
        match data.get("numero_factura").and_then(Value::as_str) {
            Some(number) => format!("Factura {}", number),
            None => "Factura".to_string(),
        }
    }

    fn template_id(&self) -> &str {
        "sales_invoice"
    }

    fn validate(&self, data: &Value) -> DocumentResult<()> {
        let obj = data.as_object().ok_or_else(|| {
            DocumentError::Validation("Los datos deben ser un objeto JSON".to_string())
        })?;

        for field in REQUIRED_FIELDS {
            if !obj.contains_key(field) {
                return Err(DocumentError::Validation(format!(
                    "Campo requerido faltante: {}",
                    field
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::InvoiceGenerator;
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn invoice() -> Invoice {
        let mut rng = StdRng::seed_from_u64(21);
        InvoiceGenerator::new().generate_with(
            &mut rng,
            "FAC-2025-001",
            NaiveDate::from_ymd_opt(2025, 8, 15).unwrap(),
        )
    }

    #[test]
    fn layout_contains_sections_in_order() {
        let source = SalesInvoiceTemplate::new().render_invoice(&invoice());

        let markers = [
            "FACTURA DE VENTA",
            "Numero de Factura:",
            "Datos de la Empresa",
            "Datos del Cliente",
            "Detalle de Productos",
            "P. Unitario",
            "Impuesto (IVA 19%):",
            "TOTAL:",
        ];
        let mut last = 0;
        for marker in markers {
            let pos = source[last..]
                .find(marker)
                .unwrap_or_else(|| panic!("falta {}", marker));
            last += pos;
        }
    }

    #[test]
    fn items_table_has_one_row_per_line_item_with_whole_peso_prices() {
        let invoice = invoice();
        let table = SalesInvoiceTemplate::new().items_table(&invoice);

        assert_eq!(table.headers.len(), 5);
        assert_eq!(table.rows.len(), invoice.items.len());
        for (row, item) in table.rows.iter().zip(&invoice.items) {
            assert_eq!(row[0], item.product);
            assert_eq!(row[1], item.category.label());
            assert_eq!(row[2], item.quantity.to_string());
            assert!(row[3].starts_with('$'));
            assert!(!row[3].contains('.'));
            assert_eq!(row[4], Money::new(item.subtotal()).with_decimals(0).format());
        }
    }

    #[test]
    fn totals_use_two_decimals_and_emphasize_total() {
        let invoice = invoice();
        let table = SalesInvoiceTemplate::new().totals_table(&invoice);

        assert_eq!(table.rows.len(), 3);
        assert_eq!(table.rows[2][0], "TOTAL:");
        assert_eq!(table.rows[2][1], Money::new(invoice.total).format());
        assert_eq!(table.rows[0][1], Money::new(invoice.subtotal).format());
        assert!(table.rows[1][1].contains('.'));
        assert!(table.style.emphasis.is_some());
    }

    #[test]
    fn generate_rejects_documents_that_are_not_invoices() {
        let template = SalesInvoiceTemplate::new();
        let bogus = serde_json::json!({"numero_factura": "X"});

        assert!(matches!(template.validate(&bogus), Err(DocumentError::Validation(_))));
        assert!(matches!(template.generate(&bogus), Err(DocumentError::Template(_))));
        assert!(template.validate(&serde_json::json!([1, 2])).is_err());
    }

    #[test]
    fn generate_accepts_serialized_invoice() {
        let template = SalesInvoiceTemplate::new();
        let data = serde_json::to_value(invoice()).unwrap();

        assert!(template.validate(&data).is_ok());
        let source = template.generate(&data).unwrap();
        assert!(source.contains("FAC\\-2025\\-001"));
        assert_eq!(template.title(&data), "Factura FAC-2025-001");
        assert_eq!(template.template_id(), "sales_invoice");
    }
}
