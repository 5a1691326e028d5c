mod logged_hours;
#[cfg(test)]
pub mod mock;

pub use logged_hours::*;
