use crate::review::ReviewError;
use crate::store::StoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("missing credential: environment variable {0} is not set")]
    MissingCredential(String),

    #[error("school identifier missing: pass --slug or include `slug` in {0}")]
    MissingSlug(String),

    #[error("invalid profile document {path}: {source}")]
    InvalidProfile {
        path: String,
        source: serde_json::Error,
    },

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("review error: {0}")]
    Review(#[from] ReviewError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("logging setup failed: {0}")]
    Telemetry(String),
}

pub type Result<T> = std::result::Result<T, ScanError>;
