pub mod client;
pub mod handlers;
pub mod routes;
pub mod state;

pub use client::{BackendClient, FetchError, InvoiceSource};
pub use routes::configure_routes;
pub use state::{WebConfig, WebState};
