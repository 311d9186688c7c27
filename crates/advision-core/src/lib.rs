//! Core types for AdVision: the ad catalog, the analysis schema shared by the
//! heuristic and generation-backed paths, and application configuration.

mod ads;
mod app_config;
mod catalog;
mod config;
pub mod schema;

use thiserror::Error;

pub use ads::{load_ads, parse_ads, AdRecord, AdsFile};
pub use app_config::{AppConfig, Environment};
pub use catalog::{AdCatalog, AdField, AdFilter};
pub use config::{load_app_config, load_app_config_from_env};
pub use schema::{
    AdAnalysis, AnalysisSections, CampaignBrief, CampaignImage, CampaignStrategy, ImageBrief,
    InsightsReport, Sentiment,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read catalog file {path}: {source}")]
    CatalogFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog file: {0}")]
    CatalogFileParse(#[source] serde_yaml::Error),

    #[error("catalog validation failed: {0}")]
    Validation(String),
}
