pub mod app_config;
pub mod catalog;
pub mod config;
pub mod records;
pub mod slug;
pub mod static_products;
pub mod taxonomy;

pub use app_config::{AppConfig, Environment, ParsePolicy};
pub use catalog::{
    Catalog, CategoryDocument, CollectionDocument, MaterialDocument, ProductDocument, Reference,
    RunSummary, SlugField, VariantDocument,
};
pub use config::{load_app_config, load_app_config_from_env};
pub use records::{
    round_measure, CleanedRecord, ProductGroup, RawRow, Variant, VariantStatus,
    MAX_DIMENSION_INCHES, MAX_WEIGHT_GRAMS,
};
pub use slug::slugify;
pub use static_products::{load_static_products, StaticProduct, StaticProductsFile};
pub use taxonomy::{CollectionId, MaterialId};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read static products file {path}: {source}")]
    StaticProductsIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse static products file: {0}")]
    StaticProductsParse(#[from] serde_yaml::Error),

    #[error("configuration validation failed: {0}")]
    Validation(String),
}
