pub mod error;
pub mod health;
pub mod logged_hours;

pub use error::ApiError;
