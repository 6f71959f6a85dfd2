pub mod app;
pub mod config;
pub mod loader;
pub mod models;
pub mod parsers;
pub mod query;
pub mod render;
pub mod utils;
