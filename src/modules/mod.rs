pub mod attendances;
pub mod auth;
pub mod colleges;
pub mod users;
