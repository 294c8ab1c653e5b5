pub mod artifact;
pub mod caption;
pub mod cli;
pub mod config;
pub mod error;
pub mod notifier;
pub mod sink;
