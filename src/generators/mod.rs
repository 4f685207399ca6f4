pub mod fake;
pub mod invoice;
pub mod pdf;

pub use invoice::InvoiceGenerator;
pub use pdf::PdfGenerator;
