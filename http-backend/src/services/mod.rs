pub mod connection;
pub mod database;
pub mod metrics;
pub mod users;

pub use connection::{ConnectionGuard, MongoConnectionGuard, MongoConnector, StoreConnector};
pub use database::MongoDb;
pub use metrics::{get_metrics, init_metrics};
pub use users::{InMemoryUserRepository, MongoUserRepository, UserRepository};
