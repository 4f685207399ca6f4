pub mod builder;

pub use builder::PdfBuilder;
