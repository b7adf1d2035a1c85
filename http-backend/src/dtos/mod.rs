pub mod users;

pub use users::{CreateUserRequest, UserResponse, REQUIRED_FIELDS_MESSAGE};
