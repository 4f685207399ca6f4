use serde_json::Value;
use std::path::PathBuf;
use std::process::Command;
use uuid::Uuid;

use crate::core::{DocumentError, DocumentResult, PdfConfig};
use crate::templates::{SalesInvoiceTemplate, TypstTemplate};

/// Generador de PDFs de factura usando Typst
pub struct PdfGenerator {
    template: Box<dyn TypstTemplate>,
    config: PdfConfig,
    typst_bin: String,
    temp_dir: PathBuf,
}

impl PdfGenerator {
    pub fn new(typst_bin: impl Into<String>, temp_dir: impl Into<PathBuf>) -> Self {
        PdfGenerator {
            template: Box::new(SalesInvoiceTemplate::new()),
            config: PdfConfig::default(),
            typst_bin: typst_bin.into(),
            temp_dir: temp_dir.into(),
        }
    }

    /// Documento Typst completo: configuración de página más cuerpo de la plantilla
    pub fn typst_document(&self, data: &Value) -> DocumentResult<String> {
        self.template.validate(data)?;
        let body = self.template.generate(data)?;

        Ok(format!(
            "{}\n\n{}\n",
            self.config.to_typst_header(&self.template.title(data)),
            body
        ))
    }

    /// Genera el PDF de una factura a partir de su documento JSON
    pub async fn render(&self, data: &Value) -> DocumentResult<Vec<u8>> {
        let source = self.typst_document(data)?;
        let pdf = self.compile_typst_to_pdf(&source).await?;

        tracing::debug!(
            plantilla = self.template.template_id(),
            bytes = pdf.len(),
            "PDF compilado"
        );

        Ok(pdf)
    }

    /// Compila contenido Typst a PDF
    async fn compile_typst_to_pdf(&self, typst_content: &str) -> DocumentResult<Vec<u8>> {
        tokio::fs::create_dir_all(&self.temp_dir).await?;

        let temp_id = Uuid::new_v4();
        let typ_path = self.temp_dir.join(format!("factura_{}.typ", temp_id));
        let pdf_path = self.temp_dir.join(format!("factura_{}.pdf", temp_id));

        tokio::fs::write(&typ_path, typst_content).await?;

        let output = tokio::task::spawn_blocking({
            let typst_bin = self.typst_bin.clone();
            let typ_path = typ_path.clone();
            let pdf_path = pdf_path.clone();
            move || {
                Command::new(typst_bin)
                    .arg("compile")
                    .arg(&typ_path)
                    .arg(&pdf_path)
                    .output()
            }
        })
        .await?;

        let _ = tokio::fs::remove_file(&typ_path).await;

        let output = output.map_err(|e| {
            DocumentError::Generation(format!("Error ejecutando {}: {}", self.typst_bin, e))
        })?;

        if !output.status.success() {
            let _ = tokio::fs::remove_file(&pdf_path).await;
            return Err(DocumentError::Generation(format!(
                "Typst compilation failed: {}",
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        let pdf_bytes = tokio::fs::read(&pdf_path).await?;
        let _ = tokio::fs::remove_file(&pdf_path).await;

        Ok(pdf_bytes)
    }
}
