pub mod billing;
pub mod connection;
