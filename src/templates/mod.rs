pub mod helpers;
pub mod page;
pub mod sales_invoice;
pub mod template_trait;

pub use page::IndexPage;
pub use sales_invoice::SalesInvoiceTemplate;
pub use template_trait::TypstTemplate;
