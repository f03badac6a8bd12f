pub mod data_loader;
pub mod error;
pub mod provider;
