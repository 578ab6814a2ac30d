//! # Storage Module
//!
//! Read-only application configuration.

pub mod config_repository;

pub use config_repository::{AppConfig, ExportConfig};
