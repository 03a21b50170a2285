//! Application and server configuration models.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Validate)]
pub struct ServerConfig {
    /// Port to listen on
    #[validate(range(min = 1024, max = 65535))]
    #[serde(default = "default_port")]
    pub port: u16,
    /// Allow LAN access (bind to 0.0.0.0)
    #[serde(default)]
    pub allow_lan_access: bool,
    /// Directory holding the upload page
    #[validate(length(min = 1))]
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
    /// Request body limit for uploads, in bytes
    #[validate(range(min = 1024, max = 104_857_600))]
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
    /// Engine runs per request before a constraint violation is reported
    #[validate(range(min = 1, max = 100))]
    #[serde(default = "default_assignment_attempts")]
    pub assignment_attempts: u32,
    /// Reject uploads that are not labelled as CSV
    #[serde(default)]
    pub strict_uploads: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            allow_lan_access: false,
            static_dir: default_static_dir(),
            max_upload_bytes: default_max_upload_bytes(),
            assignment_attempts: default_assignment_attempts(),
            strict_uploads: false,
        }
    }
}

impl ServerConfig {
    /// Get the bind address based on LAN access setting.
    pub fn get_bind_address(&self) -> String {
        if self.allow_lan_access {
            "0.0.0.0".to_string()
        } else {
            "127.0.0.1".to_string()
        }
    }

    /// Get the full bind socket address.
    pub fn get_socket_addr(&self) -> String {
        format!("{}:{}", self.get_bind_address(), self.port)
    }
}

/// Full application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Validate)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    #[validate(nested)]
    pub server: ServerConfig,
}

// ============================================================================
// Default Value Functions
// ============================================================================

fn default_port() -> u16 {
    8046
}

fn default_static_dir() -> String {
    "./santa-server/static".to_string()
}

fn default_max_upload_bytes() -> usize {
    10 * 1024 * 1024
}

fn default_assignment_attempts() -> u32 {
    1
}
