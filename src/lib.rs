//! Product API Library

pub mod config;
pub mod error;
pub mod http;
pub mod products;
pub mod store;

pub use config::schema::ServerConfig;
pub use error::ApiError;
pub use http::HttpServer;
pub use store::{MemoryStore, ProductStore};
