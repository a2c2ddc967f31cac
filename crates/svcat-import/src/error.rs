use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("input has no header line")]
    EmptyInput,

    #[error("header is missing required column \"{column}\"")]
    MissingHeader { column: &'static str },

    #[error("line {line}: invalid value {value:?} in column \"{column}\"")]
    InvalidField {
        line: usize,
        column: &'static str,
        value: String,
    },

    #[error("JSON serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error(transparent)]
    Config(#[from] svcat_core::ConfigError),
}
