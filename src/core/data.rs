use crate::templates::helpers::format_number_with_separators;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnAlign {
    Left,
    Center,
    Right,
}

impl ColumnAlign {
    pub fn to_typst(self) -> &'static str {
        match self {
            ColumnAlign::Left => "left",
            ColumnAlign::Center => "center",
            ColumnAlign::Right => "right",
        }
    }
}

/// Trazo de una tabla: grosor en puntos y color hexadecimal.
#[derive(Debug, Clone)]
pub struct Stroke {
    pub width: f32,
    pub color: String,
}

impl Stroke {
    pub fn new(width: f32, color: &str) -> Self {
        Stroke {
            width,
            color: color.to_string(),
        }
    }
}

/// Resalta la última fila de una tabla (usado en el bloque de totales).
#[derive(Debug, Clone)]
pub struct RowEmphasis {
    pub font_size: f32,
    pub color: String,
    pub value_fill: Option<String>,
    pub rule: Option<Stroke>,
}

#[derive(Debug, Clone)]
pub struct TableStyle {
    pub stroke: Option<Stroke>,
    pub header_fill: Option<String>,
    pub header_color: Option<String>,
    pub label_fill: Option<String>,
    pub body_fill: Option<String>,
    pub bold_labels: bool,
    pub font_size: f32,
    pub inset: f32,
    pub emphasis: Option<RowEmphasis>,
}

impl Default for TableStyle {
    fn default() -> Self {
        TableStyle {
            stroke: Some(Stroke::new(0.5, "#808080")),
            header_fill: Some("#F0F0F0".to_string()),
            header_color: None,
            label_fill: None,
            body_fill: None,
            bold_labels: false,
            font_size: 10.0,
            inset: 6.0,
            emphasis: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TableData {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub column_widths: Option<Vec<f32>>,
    pub alignment: Option<Vec<ColumnAlign>>,
    pub style: TableStyle,
}

impl TableData {
    pub fn new(headers: Vec<String>) -> Self {
        TableData {
            headers,
            rows: Vec::new(),
            column_widths: None,
            alignment: None,
            style: TableStyle::default(),
        }
    }

    /// Tabla de pares etiqueta/valor, sin fila de encabezado.
    pub fn key_value(pairs: &[(&str, &str)]) -> Self {
        let mut table = TableData::new(Vec::new());
        for (label, value) in pairs {
            table.add_row(vec![label.to_string(), value.to_string()]);
        }
        table
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn with_column_widths(mut self, widths: Vec<f32>) -> Self {
        self.column_widths = Some(widths);
        self
    }

    pub fn with_alignment(mut self, alignment: Vec<ColumnAlign>) -> Self {
        self.alignment = Some(alignment);
        self
    }

    pub fn with_style(mut self, style: TableStyle) -> Self {
        self.style = style;
        self
    }

    pub fn column_count(&self) -> usize {
        if let Some(widths) = &self.column_widths {
            return widths.len();
        }
        self.headers
            .len()
            .max(self.rows.iter().map(Vec::len).max().unwrap_or(0))
    }
}

#[derive(Debug, Clone)]
pub struct Money {
    pub amount: f64,
    pub symbol: String,
    pub decimals: usize,
}

impl Money {
    pub fn new(amount: f64) -> Self {
        Money {
            amount,
            symbol: "$".to_string(),
            decimals: 2,
        }
    }

    pub fn with_decimals(mut self, decimals: usize) -> Self {
        self.decimals = decimals;
        self
    }

    pub fn format(&self) -> String {
        let formatted = format_number_with_separators(self.amount.abs(), self.decimals);
        if self.amount < 0.0 {
            format!("-{}{}", self.symbol, formatted)
        } else {
            format!("{}{}", self.symbol, formatted)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_uses_thousands_separators_and_fixed_decimals() {
        assert_eq!(Money::new(17136.0).format(), "$17,136.00");
        assert_eq!(Money::new(2736.45).format(), "$2,736.45");
        assert_eq!(Money::new(1200.0).with_decimals(0).format(), "$1,200");
        assert_eq!(Money::new(999.0).with_decimals(0).format(), "$999");
        assert_eq!(Money::new(-1500.5).format(), "-$1,500.50");
    }

    #[test]
    fn key_value_tables_have_no_header_and_two_columns() {
        let table = TableData::key_value(&[("Nombre:", "Tienda Ruiz"), ("Telefono:", "+57 300 100 1000")]);

        assert!(table.headers.is_empty());
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.column_count(), 2);
    }

    #[test]
    fn column_count_prefers_explicit_widths() {
        let table = TableData::new(vec!["A".into(), "B".into()]).with_column_widths(vec![10.0, 20.0, 30.0]);
        assert_eq!(table.column_count(), 3);
    }
}
