use std::fs;
use std::path::{Path, PathBuf};

use santa_types::{AppConfig, ConfigError};
use validator::Validate;

const DATA_DIR: &str = ".secret_santa";
const CONFIG_FILE: &str = "santa_config.json";

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "SANTA_DATA_DIR";

/// Locate the data directory without touching the filesystem.
pub fn data_dir_path() -> Result<PathBuf, ConfigError> {
    match std::env::var_os(DATA_DIR_ENV) {
        Some(dir) => Ok(PathBuf::from(dir)),
        None => Ok(dirs::home_dir()
            .ok_or_else(|| ConfigError::DataDir {
                message: "Cannot get home directory".to_string(),
            })?
            .join(DATA_DIR)),
    }
}

/// Get the data directory path, creating it if needed.
pub fn get_data_dir() -> Result<PathBuf, ConfigError> {
    let data_dir = data_dir_path()?;

    if !data_dir.exists() {
        fs::create_dir_all(&data_dir).map_err(|e| ConfigError::DataDir {
            message: format!("Failed to create data directory: {}", e),
        })?;
    }

    Ok(data_dir)
}

/// Load the application config, falling back to defaults when no file exists.
/// Reading never creates the data directory.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from(&data_dir_path()?)
}

pub fn load_config_from(data_dir: &Path) -> Result<AppConfig, ConfigError> {
    let config_path = data_dir.join(CONFIG_FILE);

    if !config_path.exists() {
        return Ok(AppConfig::default());
    }

    let content = fs::read_to_string(&config_path).map_err(|e| ConfigError::ReadError {
        path: config_path.display().to_string(),
        message: e.to_string(),
    })?;

    let config: AppConfig =
        serde_json::from_str(&content).map_err(|e| ConfigError::from_json_error(&e))?;
    validate(&config)?;
    Ok(config)
}

pub fn save_config_to(data_dir: &Path, config: &AppConfig) -> Result<(), ConfigError> {
    validate(config)?;

    let config_path = data_dir.join(CONFIG_FILE);
    let temp_path = data_dir.join(format!("{}.tmp", CONFIG_FILE));

    let content =
        serde_json::to_string_pretty(config).map_err(|e| ConfigError::from_json_error(&e))?;

    // Atomic write
    fs::write(&temp_path, content).map_err(|e| ConfigError::from_io_error(&e))?;
    fs::rename(&temp_path, &config_path).map_err(|e| ConfigError::from_io_error(&e))
}

/// Update specific fields in the config.
pub fn update_config<F>(updater: F) -> Result<AppConfig, ConfigError>
where
    F: FnOnce(&mut AppConfig),
{
    update_config_in(&get_data_dir()?, updater)
}

pub fn update_config_in<F>(data_dir: &Path, updater: F) -> Result<AppConfig, ConfigError>
where
    F: FnOnce(&mut AppConfig),
{
    let mut config = load_config_from(data_dir)?;
    updater(&mut config);
    save_config_to(data_dir, &config)?;
    Ok(config)
}

fn validate(config: &AppConfig) -> Result<(), ConfigError> {
    config.validate().map_err(|e| ConfigError::ValidationError {
        field: "server".to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = load_config_from(dir.path()).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let mut config = AppConfig::default();
        config.server.port = 9100;
        config.server.assignment_attempts = 5;

        save_config_to(dir.path(), &config).unwrap();
        assert!(!dir.path().join("santa_config.json.tmp").exists());

        let loaded = load_config_from(dir.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_loading_from_missing_dir_does_not_create_it() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("never-created");

        let config = load_config_from(&missing).unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(!missing.exists());
    }

    #[test]
    fn test_update_keeps_other_fields() {
        let dir = TempDir::new().unwrap();
        let mut initial = AppConfig::default();
        initial.server.port = 9200;
        save_config_to(dir.path(), &initial).unwrap();

        let updated =
            update_config_in(dir.path(), |config| config.server.strict_uploads = true).unwrap();

        assert!(updated.server.strict_uploads);
        assert_eq!(updated.server.port, 9200);
        assert_eq!(load_config_from(dir.path()).unwrap(), updated);
    }

    #[test]
    fn test_update_rejects_invalid_result() {
        let dir = TempDir::new().unwrap();
        let err = update_config_in(dir.path(), |config| config.server.assignment_attempts = 0)
            .unwrap_err();

        assert!(matches!(err, ConfigError::ValidationError { .. }));
        assert!(!dir.path().join(CONFIG_FILE).exists());
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "{ not json").unwrap();

        let err = load_config_from(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn test_out_of_range_value_rejected() {
        let dir = TempDir::new().unwrap();
        let mut config = AppConfig::default();
        config.server.assignment_attempts = 0;

        let err = save_config_to(dir.path(), &config).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError { .. }));
    }
}
