pub mod api;
pub mod core;
pub mod generators;
pub mod metrics;
pub mod models;
pub mod pdf;
pub mod templates;
pub mod web;

// Re-export commonly used types
pub use models::{Category, Client, Company, Invoice, InvoiceTotals, LineItem, TAX_RATE};

pub use generators::{InvoiceGenerator, PdfGenerator};
pub use web::{BackendClient, InvoiceSource};
