use crate::core::{TableData, TableStyle};
use crate::templates::helpers::escape_typst;

/// Construye el cuerpo de un documento Typst sección por sección.
pub struct PdfBuilder {
    sections: Vec<String>,
}

impl Default for PdfBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfBuilder {
    pub fn new() -> Self {
        PdfBuilder {
            sections: Vec::new(),
        }
    }

    pub fn add_title(&mut self, title: &str, size: f32, color: &str) -> &mut Self {
        self.sections.push(format!(
            "#align(center)[#text(size: {}pt, weight: \"bold\", fill: rgb(\"{}\"))[{}]]",
            size,
            color,
            escape_typst(title)
        ));
        self
    }

    pub fn add_subtitle(&mut self, subtitle: &str, size: f32, color: &str) -> &mut Self {
        self.sections.push(format!(
            "#text(size: {}pt, weight: \"bold\", fill: rgb(\"{}\"))[{}]",
            size,
            color,
            escape_typst(subtitle)
        ));
        self
    }

    pub fn add_spacing(&mut self, points: f32) -> &mut Self {
        self.sections.push(format!("#v({}pt)", points));
        self
    }

    pub fn add_table(&mut self, table: &TableData) -> &mut Self {
        let style = &table.style;
        let mut typst = format!("#[\n#set text(size: {}pt)\n#table(\n", style.font_size);

        if let Some(widths) = &table.column_widths {
            let width_str: Vec<String> = widths.iter().map(|w| format!("{}pt", w)).collect();
            typst.push_str(&format!("  columns: ({}),\n", width_str.join(", ")));
        } else {
            typst.push_str(&format!("  columns: {},\n", table.column_count()));
        }

        if let Some(alignment) = &table.alignment {
            let align_str: Vec<&str> = alignment.iter().map(|a| a.to_typst()).collect();
            typst.push_str(&format!("  align: ({},),\n", align_str.join(", ")));
        }

        match &style.stroke {
            Some(stroke) => typst.push_str(&format!(
                "  stroke: {}pt + rgb(\"{}\"),\n",
                stroke.width, stroke.color
            )),
            None => typst.push_str("  stroke: none,\n"),
        }

        typst.push_str(&format!("  fill: {},\n", fill_function(table)));
        typst.push_str(&format!("  inset: {}pt,\n", style.inset));

        if let Some(rule) = style.emphasis.as_ref().and_then(|e| e.rule.as_ref()) {
            if let Some(last) = last_row_index(table) {
                typst.push_str(&format!(
                    "  table.hline(y: {}, stroke: {}pt + rgb(\"{}\")),\n",
                    last, rule.width, rule.color
                ));
            }
        }

        for header in &table.headers {
            let header = escape_typst(header);
            let cell = match &style.header_color {
                Some(color) => format!(
                    "[#text(weight: \"bold\", fill: rgb(\"{}\"))[{}]]",
                    color, header
                ),
                None => format!("[#text(weight: \"bold\")[{}]]", header),
            };
            typst.push_str(&format!("  {},\n", cell));
        }

        let last_body_row = table.rows.len().checked_sub(1);
        for (row_index, row) in table.rows.iter().enumerate() {
            let emphasized = style.emphasis.is_some() && Some(row_index) == last_body_row;
            for (col_index, cell) in row.iter().enumerate() {
                typst.push_str(&format!(
                    "  {},\n",
                    render_cell(style, cell, col_index, emphasized)
                ));
            }
        }

        typst.push_str(")\n]");
        self.sections.push(typst);
        self
    }

    pub fn build(&self) -> String {
        self.sections.join("\n\n")
    }
}

fn render_cell(style: &TableStyle, cell: &str, col_index: usize, emphasized: bool) -> String {
    let text = escape_typst(cell);
    if emphasized {
        if let Some(emphasis) = &style.emphasis {
            return format!(
                "[#text(size: {}pt, weight: \"bold\", fill: rgb(\"{}\"))[{}]]",
                emphasis.font_size, emphasis.color, text
            );
        }
    }
    if style.bold_labels && col_index == 0 {
        format!("[#text(weight: \"bold\")[{}]]", text)
    } else {
        format!("[{}]", text)
    }
}

/// Índice Typst (contando encabezados) de la última fila de la tabla.
fn last_row_index(table: &TableData) -> Option<usize> {
    let header_rows = usize::from(!table.headers.is_empty());
    (header_rows + table.rows.len()).checked_sub(1)
}

fn fill_function(table: &TableData) -> String {
    let style = &table.style;
    let mut branches: Vec<String> = Vec::new();

    if !table.headers.is_empty() {
        if let Some(fill) = &style.header_fill {
            branches.push(format!("if y == 0 {{ rgb(\"{}\") }}", fill));
        }
    }

    if let Some(emphasis) = &style.emphasis {
        if let (Some(fill), Some(last)) = (&emphasis.value_fill, last_row_index(table)) {
            let last_col = table.column_count().saturating_sub(1);
            branches.push(format!(
                "if x == {} and y == {} {{ rgb(\"{}\") }}",
                last_col, last, fill
            ));
        }
    }

    if let Some(fill) = &style.label_fill {
        branches.push(format!("if x == 0 {{ rgb(\"{}\") }}", fill));
    }

    let fallback = match &style.body_fill {
        Some(fill) => format!("rgb(\"{}\")", fill),
        None => "none".to_string(),
    };

    if branches.is_empty() {
        return format!("(x, y) => {}", fallback);
    }

    format!("(x, y) => {} else {{ {} }}", branches.join(" else "), fallback)
}
