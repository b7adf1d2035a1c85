pub mod health;
pub mod index;
pub mod metrics;
pub mod users;

pub use health::{health_check, readiness_check};
pub use index::index;
pub use metrics::metrics_endpoint;
pub use users::{create_user, list_users};
