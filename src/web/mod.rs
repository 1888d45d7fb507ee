pub mod api;
pub mod authentication;
pub mod error;
pub mod frontend;
pub mod server;
pub mod session;
