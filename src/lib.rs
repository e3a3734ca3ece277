pub mod comparison;
pub mod config;
pub mod i18n;
pub mod metrics;
pub mod output;
pub mod recommendation;
pub mod school;
pub mod server;
pub mod store;
pub mod transfer;
