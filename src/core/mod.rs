pub mod channels;
pub mod config;
pub mod models;
