pub mod analysis;
pub mod config;
pub mod extractor;
pub mod fetcher;
pub mod health;
pub mod server;
