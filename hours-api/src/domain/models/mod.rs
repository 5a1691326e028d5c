pub mod datetime;
mod ids;
mod logged_hour;
mod report;

pub use ids::*;
pub use logged_hour::*;
pub use report::*;
