pub mod cli;
pub mod collector;
pub mod error;
pub mod github;
pub mod models;
pub mod output;
pub mod pagination;
pub mod transport;
pub mod types;
