use config::{Config, Environment, File};
use serde::Deserialize;

use crate::CLIENT_NAME;

const CONFIG_NAME: &str = "config.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Persist the raw fetched document alongside the CSV exports.
    pub debug: bool,
    pub simplefin: SimpleFin,
    pub output: Output,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SimpleFin {
    pub setup_token: Option<String>,
    /// Accounts endpoint produced by a claim, including the `/accounts` path.
    pub url: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Output {
    pub accounts_file: String,
    pub transactions_file: String,
    pub json_file: String,
}

impl Default for Output {
    fn default() -> Self {
        Self {
            accounts_file: "accounts".to_string(),
            transactions_file: "transactions".to_string(),
            json_file: "accounts_raw".to_string(),
        }
    }
}

impl Settings {
    pub fn new(config_path: Option<&str>) -> Result<Self, config::ConfigError> {
        let mut s = Config::builder();

        if let Some(path) = config_path {
            s = s.add_source(File::with_name(path));
        } else {
            s = s.add_source(File::with_name(&default_config_path()).required(false));
        }

        s = s.add_source(
            Environment::with_prefix(&CLIENT_NAME.to_uppercase()).separator("__"),
        );

        s.build()?.try_deserialize()
    }
}

fn default_config_path() -> String {
    dirs::config_dir()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| std::env::temp_dir()))
        .join(CLIENT_NAME)
        .join(CONFIG_NAME)
        .display()
        .to_string()
}
