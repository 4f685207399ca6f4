pub mod category;
pub mod invoice;

pub use category::*;
pub use invoice::*;
