use std::path::Path;

use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub struct Config {
    pub show_warnings: bool,
    pub deny_warnings: bool,
}

impl From<RawConfig> for Config {
    fn from(raw_config: RawConfig) -> Self {
        Self {
            show_warnings: raw_config.show_warnings.unwrap_or(true),
            deny_warnings: raw_config.deny_warnings.unwrap_or(false),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct RawConfig {
    show_warnings: Option<bool>,
    deny_warnings: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            show_warnings: true,
            deny_warnings: false,
        }
    }
}

fn load_project_config<P: AsRef<Path>>(root_dir: P) -> Option<Config> {
    let config_path = root_dir.as_ref().join("cool-check.toml");
    if !config_path.exists() {
        return None;
    };

    let config = std::fs::read_to_string(config_path).ok()?;

    convert_from_toml(&config)
}

fn convert_from_toml(config: &str) -> Option<Config> {
    let raw_config: RawConfig = toml::from_str(config).ok()?;
    Some(raw_config.into())
}

pub fn load_config<P: AsRef<Path>>(root_dir: Option<P>) -> Config {
    match root_dir {
        Some(root_dir) => load_project_config(root_dir).unwrap_or_default(),
        None => Config::default(),
    }
}
