pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use routes::{configure_routes, create_cors};
pub use state::{ApiState, AppConfig};
