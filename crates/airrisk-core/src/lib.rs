//! Shared domain types, static lookup tables, and configuration for the
//! aviation-risk KML pipeline.

pub mod advisory;
pub mod app_config;
pub mod config;
pub mod error;
pub mod tables;

pub use advisory::{AdvisoryRecord, NoticeRecord, RiskLevel};
pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::ConfigError;
