pub mod auth;
pub mod client;
pub mod models;
pub mod provision;
pub mod request;
pub mod transport;
