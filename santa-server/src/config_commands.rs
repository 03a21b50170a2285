use anyhow::Result;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Table};

use santa_core::modules::config as core_config;
use santa_types::AppConfig;

pub const CONFIG_KEYS: [&str; 6] = [
    "server.port",
    "server.allow_lan_access",
    "server.static_dir",
    "server.max_upload_bytes",
    "server.assignment_attempts",
    "server.strict_uploads",
];

pub fn show_config(json: bool) -> Result<()> {
    let config = core_config::load_config()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&config)?);
    } else {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL).set_header(vec!["Key", "Value"]);
        for key in CONFIG_KEYS {
            table.add_row(vec![key.to_string(), read_value(&config, key)?]);
        }
        println!("{}", "Server Configuration:".cyan().bold());
        println!("{table}");
    }
    Ok(())
}

pub fn get_config_value(key: &str) -> Result<()> {
    let config = core_config::load_config()?;
    println!("{}", read_value(&config, key)?);
    Ok(())
}

pub fn set_config_value(key: &str, value: &str) -> Result<()> {
    let setting = Setting::parse(key, value)?;
    core_config::update_config(|config| setting.apply(config))?;

    println!("{} Config updated: {} = {}", "✓".green(), key, value);
    Ok(())
}

pub(crate) fn read_value(config: &AppConfig, key: &str) -> Result<String> {
    let server = &config.server;
    let value = match key {
        "server.port" => server.port.to_string(),
        "server.allow_lan_access" => server.allow_lan_access.to_string(),
        "server.static_dir" => server.static_dir.clone(),
        "server.max_upload_bytes" => server.max_upload_bytes.to_string(),
        "server.assignment_attempts" => server.assignment_attempts.to_string(),
        "server.strict_uploads" => server.strict_uploads.to_string(),
        _ => anyhow::bail!("Unknown config key: {}", key),
    };
    Ok(value)
}

/// One parsed `config set` assignment.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Setting {
    Port(u16),
    AllowLanAccess(bool),
    StaticDir(String),
    MaxUploadBytes(usize),
    AssignmentAttempts(u32),
    StrictUploads(bool),
}

impl Setting {
    pub(crate) fn parse(key: &str, value: &str) -> Result<Self> {
        let setting = match key {
            "server.port" => Self::Port(
                value.parse().map_err(|_| anyhow::anyhow!("Invalid port number: {}", value))?,
            ),
            "server.allow_lan_access" => Self::AllowLanAccess(
                value.parse().map_err(|_| anyhow::anyhow!("Invalid boolean: {}", value))?,
            ),
            "server.static_dir" => Self::StaticDir(value.to_string()),
            "server.max_upload_bytes" => Self::MaxUploadBytes(
                value.parse().map_err(|_| anyhow::anyhow!("Invalid byte count: {}", value))?,
            ),
            "server.assignment_attempts" => Self::AssignmentAttempts(
                value.parse().map_err(|_| anyhow::anyhow!("Invalid attempt count: {}", value))?,
            ),
            "server.strict_uploads" => Self::StrictUploads(
                value.parse().map_err(|_| anyhow::anyhow!("Invalid boolean: {}", value))?,
            ),
            _ => anyhow::bail!("Unknown config key: {}", key),
        };
        Ok(setting)
    }

    pub(crate) fn apply(self, config: &mut AppConfig) {
        let server = &mut config.server;
        match self {
            Self::Port(port) => server.port = port,
            Self::AllowLanAccess(allow) => server.allow_lan_access = allow,
            Self::StaticDir(dir) => server.static_dir = dir,
            Self::MaxUploadBytes(bytes) => server.max_upload_bytes = bytes,
            Self::AssignmentAttempts(attempts) => server.assignment_attempts = attempts,
            Self::StrictUploads(strict) => server.strict_uploads = strict,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use santa_core::modules::config::update_config_in;
    use tempfile::TempDir;

    #[test]
    fn test_every_key_round_trips() {
        let config = AppConfig::default();
        for key in CONFIG_KEYS {
            let mut copy = config.clone();
            let value = read_value(&config, key).unwrap();
            Setting::parse(key, &value).unwrap().apply(&mut copy);
            assert_eq!(copy, config, "key {key}");
        }
    }

    #[test]
    fn test_parse_values() {
        assert_eq!(
            Setting::parse("server.assignment_attempts", "5").unwrap(),
            Setting::AssignmentAttempts(5)
        );
        assert_eq!(
            Setting::parse("server.strict_uploads", "true").unwrap(),
            Setting::StrictUploads(true)
        );
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(Setting::parse("server.port", "eighty").is_err());
        assert!(Setting::parse("server.colour", "red").is_err());
    }

    #[test]
    fn test_setting_persists_through_update() {
        let dir = TempDir::new().unwrap();
        let setting = Setting::parse("server.assignment_attempts", "7").unwrap();

        update_config_in(dir.path(), |config| setting.apply(config)).unwrap();

        let loaded = santa_core::modules::config::load_config_from(dir.path()).unwrap();
        assert_eq!(loaded.server.assignment_attempts, 7);
        assert_eq!(loaded.server.port, AppConfig::default().server.port);
    }

    #[test]
    fn test_out_of_range_setting_is_not_saved() {
        let dir = TempDir::new().unwrap();
        let setting = Setting::parse("server.port", "80").unwrap();

        assert!(update_config_in(dir.path(), |config| setting.apply(config)).is_err());
        assert_eq!(
            santa_core::modules::config::load_config_from(dir.path()).unwrap(),
            AppConfig::default()
        );
    }
}
