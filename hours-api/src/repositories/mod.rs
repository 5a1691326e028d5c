mod logged_hours_repo;
mod repo_error;

pub use logged_hours_repo::*;
pub use repo_error::RepositoryError;
