pub mod handlers;
pub mod metrics;
pub mod server;

pub use handlers::AppState;
pub use metrics::ServiceMetrics;
pub use server::{build_router, Server};
