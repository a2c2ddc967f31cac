use crate::app_config::{AppConfig, Environment, ParsePolicy};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Loads `.env.local` and then `.env` before reading env vars. Neither file is
/// required, and variables already set in the process take precedence.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::from_filename(".env.local").ok();
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it from a `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        or_default(var, default)
            .parse::<u32>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_grams = |var: &str, default: &str| -> Result<f64, ConfigError> {
        let value = or_default(var, default)
            .trim()
            .parse::<f64>()
            .map_err(|e| invalid(var, e.to_string()))?;
        if !value.is_finite() || value < 0.0 {
            return Err(invalid(
                var,
                format!("expected a non-negative gram weight, got {value}"),
            ));
        }
        Ok(value)
    };

    let database_url = lookup("DATABASE_URL").ok().filter(|s| !s.trim().is_empty());

    let env = parse_environment(&or_default("SVCAT_ENV", "development"))?;
    let log_level = or_default("SVCAT_LOG_LEVEL", "info");

    let csv_path = PathBuf::from(or_default(
        "SVCAT_CSV_PATH",
        "./data/silverware-catalog.csv",
    ));
    let static_products_path = PathBuf::from(or_default(
        "SVCAT_STATIC_PRODUCTS_PATH",
        "./config/static-products.yaml",
    ));
    let output_dir = PathBuf::from(or_default("SVCAT_OUTPUT_DIR", "./generated-data"));
    let parse_policy = parse_policy(&or_default("SVCAT_PARSE_POLICY", "lenient"))?;

    let featured_min_grams = parse_grams("SVCAT_FEATURED_MIN_GRAMS", "100")?;
    let featured_max_grams = parse_grams("SVCAT_FEATURED_MAX_GRAMS", "300")?;
    if featured_min_grams > featured_max_grams {
        return Err(ConfigError::Validation(format!(
            "featured weight band is empty: min {featured_min_grams}g exceeds max {featured_max_grams}g"
        )));
    }

    let db_max_connections = parse_u32("SVCAT_DB_MAX_CONNECTIONS", "5")?;
    let db_min_connections = parse_u32("SVCAT_DB_MIN_CONNECTIONS", "1")?;
    let db_acquire_timeout_secs = parse_u64("SVCAT_DB_ACQUIRE_TIMEOUT_SECS", "10")?;

    Ok(AppConfig {
        database_url,
        env,
        log_level,
        csv_path,
        static_products_path,
        output_dir,
        parse_policy,
        featured_min_grams,
        featured_max_grams,
        db_max_connections,
        db_min_connections,
        db_acquire_timeout_secs,
    })
}

/// Parse a string into an `Environment` variant.
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnvVar` for anything other than
/// `development`, `test`, or `production`.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s.trim() {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "SVCAT_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

fn parse_policy(s: &str) -> Result<ParsePolicy, ConfigError> {
    match s.trim().to_ascii_lowercase().as_str() {
        "lenient" => Ok(ParsePolicy::Lenient),
        "strict" => Ok(ParsePolicy::Strict),
        other => Err(ConfigError::InvalidEnvVar {
            var: "SVCAT_PARSE_POLICY".to_string(),
            reason: format!("expected 'lenient' or 'strict', got '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
