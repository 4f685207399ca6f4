use serde_json::Value;

use crate::core::DocumentResult;

/// Trait base para las plantillas Typst de documentos
pub trait TypstTemplate: Send + Sync {
    /// Genera el cuerpo Typst a partir de los datos JSON
    fn generate(&self, data: &Value) -> DocumentResult<String>;

    /// Título del documento para los metadatos del PDF
    fn title(&self, data: &Value) -> String;

    /// Retorna el ID único de la plantilla
    fn template_id(&self) -> &str;

    /// Valida que los datos contengan los campos requeridos
    fn validate(&self, data: &Value) -> DocumentResult<()>;
}
