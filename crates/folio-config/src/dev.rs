//! Development server configuration types.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// User-facing development server options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevOptions {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory served as static content, relative to the project root
    #[serde(default = "default_content_base")]
    pub content_base: PathBuf,

    #[serde(default = "default_true")]
    pub hot: bool,

    #[serde(default = "default_true")]
    pub disable_host_check: bool,

    /// Open the default browser once the server is up
    #[serde(default = "default_true")]
    pub open: bool,
}

impl Default for DevOptions {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            content_base: default_content_base(),
            hot: true,
            disable_host_check: true,
            open: true,
        }
    }
}

impl DevOptions {
    pub fn browser_url(&self) -> String {
        format!("http://localhost:{}", self.port)
    }

    pub fn server_settings(&self) -> DevServerSettings {
        DevServerSettings {
            host: self.host.clone(),
            port: self.port,
            content_base: self.content_base.clone(),
            hot: self.hot,
            disable_host_check: self.disable_host_check,
        }
    }
}

/// Settings block handed to the external development server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevServerSettings {
    pub host: String,
    pub port: u16,
    pub content_base: PathBuf,
    pub hot: bool,
    pub disable_host_check: bool,
}

fn default_host() -> String {
    "0.0.0.0".into()
}

fn default_port() -> u16 {
    9200
}

fn default_content_base() -> PathBuf {
    PathBuf::from("../")
}

fn default_true() -> bool {
    true
}
