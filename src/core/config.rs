/// Márgenes de página en puntos tipográficos.
#[derive(Debug, Clone, PartialEq)]
pub struct Margin {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

impl Default for Margin {
    fn default() -> Self {
        Margin::uniform(50.0)
    }
}

impl Margin {
    pub fn uniform(size: f32) -> Self {
        Margin {
            top: size,
            bottom: size,
            left: size,
            right: size,
        }
    }

    pub fn to_typst(&self) -> String {
        format!(
            "(top: {}pt, bottom: {}pt, left: {}pt, right: {}pt)",
            self.top, self.bottom, self.left, self.right
        )
    }
}

#[derive(Debug, Clone)]
pub struct PdfConfig {
    /// Nombre de papel de Typst (`us-letter`, `a4`, ...)
    pub paper: String,
    pub margin: Margin,
    pub font_family: String,
    pub font_size: f32,
}

impl Default for PdfConfig {
    fn default() -> Self {
        PdfConfig {
            paper: "us-letter".to_string(),
            margin: Margin::default(),
            font_family: "Helvetica".to_string(),
            font_size: 10.0,
        }
    }
}

impl PdfConfig {
    pub fn to_typst_header(&self, title: &str) -> String {
        format!(
            r#"#set document(title: "{}")
#set page(
  paper: "{}",
  margin: {}
)
#set text(
  font: ("{}", "Liberation Sans", "Arial"),
  size: {}pt,
  lang: "es"
)"#,
            title.replace('\\', "\\\\").replace('"', "\\\""),
            self.paper,
            self.margin.to_typst(),
            self.font_family,
            self.font_size
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_header_targets_letter_with_fifty_point_margins() {
        let header = PdfConfig::default().to_typst_header("Factura FAC-1");

        assert!(header.contains("paper: \"us-letter\""));
        assert!(header.contains("(top: 50pt, bottom: 50pt, left: 50pt, right: 50pt)"));
        assert!(header.contains("title: \"Factura FAC-1\""));
    }

    #[test]
    fn title_quotes_are_escaped_in_header() {
        let header = PdfConfig::default().to_typst_header("FAC \"7\"");
        assert!(header.contains(r#"title: "FAC \"7\"""#));
    }

    #[test]
    fn uniform_margin_is_rendered_as_dictionary() {
        assert_eq!(
            Margin::uniform(36.0).to_typst(),
            "(top: 36pt, bottom: 36pt, left: 36pt, right: 36pt)"
        );
    }
}
