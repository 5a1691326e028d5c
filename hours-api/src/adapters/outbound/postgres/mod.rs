mod logged_hours;

pub use logged_hours::PostgresLoggedHoursAdapter;
