use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// How the field cleaner treats numeric text it cannot read.
///
/// `Lenient` coerces bad weights to `0` and bad dimensions to absent, which is
/// how catalog spreadsheets have always been loaded. `Strict` surfaces them as
/// errors instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParsePolicy {
    #[default]
    Lenient,
    Strict,
}

impl std::fmt::Display for ParsePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParsePolicy::Lenient => write!(f, "lenient"),
            ParsePolicy::Strict => write!(f, "strict"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    /// Only database commands need this; JSON imports run without it.
    pub database_url: Option<String>,
    pub env: Environment,
    pub log_level: String,
    pub csv_path: PathBuf,
    pub static_products_path: PathBuf,
    pub output_dir: PathBuf,
    pub parse_policy: ParsePolicy,
    pub featured_min_grams: f64,
    pub featured_max_grams: f64,
    pub db_max_connections: u32,
    pub db_min_connections: u32,
    pub db_acquire_timeout_secs: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field(
                "database_url",
                &self.database_url.as_ref().map(|_| "[redacted]"),
            )
            .field("csv_path", &self.csv_path)
            .field("static_products_path", &self.static_products_path)
            .field("output_dir", &self.output_dir)
            .field("parse_policy", &self.parse_policy)
            .field("featured_min_grams", &self.featured_min_grams)
            .field("featured_max_grams", &self.featured_max_grams)
            .field("db_max_connections", &self.db_max_connections)
            .field("db_min_connections", &self.db_min_connections)
            .field("db_acquire_timeout_secs", &self.db_acquire_timeout_secs)
            .finish()
    }
}
