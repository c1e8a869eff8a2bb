pub mod create_database;
pub mod create_users;
pub mod delete_database;
pub mod list_users;
