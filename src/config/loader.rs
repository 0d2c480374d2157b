//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::WarehouseConfig;
use crate::domain::errors::WarehouseError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into WarehouseConfig
/// 4. Applies environment variable overrides (WAREHOUSE_* prefix)
/// 5. Validates the configuration
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - A referenced environment variable is not set
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use warehouse_compare::config::loader::load_config;
///
/// let config = load_config("warehouse.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<WarehouseConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(WarehouseError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        WarehouseError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let config: WarehouseConfig = toml::from_str(&contents)
        .map_err(|e| WarehouseError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    finish(config)
}

/// Loads configuration, falling back to defaults when the file is absent
///
/// Environment overrides and validation still apply to the defaults.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be loaded, or the
/// resulting configuration is invalid.
pub fn load_config_or_default(path: impl AsRef<Path>) -> Result<WarehouseConfig> {
    let path = path.as_ref();
    if path.exists() {
        return load_config(path);
    }

    tracing::debug!(path = %path.display(), "No configuration file, using defaults");
    finish(WarehouseConfig::default())
}

fn finish(mut config: WarehouseConfig) -> Result<WarehouseConfig> {
    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        WarehouseError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// # Arguments
///
/// * `input` - String containing ${VAR} placeholders
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| WarehouseError::Configuration(format!("Invalid placeholder pattern: {e}")))?;
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    // Process line by line to skip comments
    for line in input.lines() {
        let trimmed = line.trim_start();

        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(WarehouseError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

fn parse_env<T: FromStr>(name: &str, value: &str) -> Result<T> {
    value.trim().parse().map_err(|_| {
        WarehouseError::Configuration(format!("Invalid value '{value}' for {name}"))
    })
}

/// Applies environment variable overrides using WAREHOUSE_* prefix
///
/// Environment variables follow the pattern: WAREHOUSE_<SECTION>_<KEY>
/// For example: WAREHOUSE_RECORDS_MAX_PHOTOS, WAREHOUSE_EXPORT_OUTPUT_DIR
///
/// # Arguments
///
/// * `config` - Mutable reference to the configuration to update
fn apply_env_overrides(config: &mut WarehouseConfig) -> Result<()> {
    // Application overrides
    if let Ok(val) = std::env::var("WAREHOUSE_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Records overrides
    if let Ok(val) = std::env::var("WAREHOUSE_RECORDS_MAX_PHOTOS") {
        config.records.max_photos = parse_env("WAREHOUSE_RECORDS_MAX_PHOTOS", &val)?;
    }

    // Export overrides
    if let Ok(val) = std::env::var("WAREHOUSE_EXPORT_TABLE_FILE_NAME") {
        config.export.table_file_name = val;
    }
    if let Ok(val) = std::env::var("WAREHOUSE_EXPORT_REPORT_TITLE") {
        config.export.report_title = val;
    }
    if let Ok(val) = std::env::var("WAREHOUSE_EXPORT_CURRENCY_CODE") {
        config.export.currency_code = val;
    }
    if let Ok(val) = std::env::var("WAREHOUSE_EXPORT_FALLBACK_FILE_STEM") {
        config.export.fallback_file_stem = val;
    }
    if let Ok(val) = std::env::var("WAREHOUSE_EXPORT_OUTPUT_DIR") {
        config.export.output_dir = val;
    }

    // Logging overrides
    if let Ok(val) = std::env::var("WAREHOUSE_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = parse_env("WAREHOUSE_LOGGING_LOCAL_ENABLED", &val)?;
    }
    if let Ok(val) = std::env::var("WAREHOUSE_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Ok(val) = std::env::var("WAREHOUSE_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_substitute_env_vars() {
        std::env::set_var("WAREHOUSE_TEST_TITLE", "Shortlist");
        let input = "report_title = \"${WAREHOUSE_TEST_TITLE}\"";
        let result = substitute_env_vars(input).unwrap();
        assert_eq!(result, "report_title = \"Shortlist\"\n");
        std::env::remove_var("WAREHOUSE_TEST_TITLE");
    }

    #[test]
    fn test_substitute_env_vars_missing() {
        std::env::remove_var("WAREHOUSE_TEST_MISSING");
        let input = "output_dir = \"${WAREHOUSE_TEST_MISSING}\"";
        let result = substitute_env_vars(input);
        assert!(result.is_err());
    }

    #[test]
    fn test_substitute_skips_comments() {
        let input = "# output_dir = \"${WAREHOUSE_TEST_IN_COMMENT}\"";
        assert!(substitute_env_vars(input).is_ok());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("nonexistent.toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_valid() {
        let toml_content = r#"
[application]
log_level = "debug"

[records]
max_photos = 10

[export]
table_file_name = "shortlist.csv"
currency_code = "USD"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.application.log_level, "debug");
        assert_eq!(config.records.max_photos, 10);
        assert_eq!(config.export.table_file_name, "shortlist.csv");
        assert_eq!(config.export.report_title, "Warehouse Comparison Report");
    }

    #[test]
    fn test_load_config_rejects_invalid_values() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[records]\nmax_photos = 0\n")
            .unwrap();
        temp_file.flush().unwrap();

        let err = load_config(temp_file.path()).unwrap_err();
        assert!(err.to_string().contains("max_photos"));
    }

    #[test]
    fn test_parse_env() {
        assert_eq!(parse_env::<usize>("X", " 12 ").unwrap(), 12);
        assert!(parse_env::<bool>("X", "sometimes").is_err());
    }
}
