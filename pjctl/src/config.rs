//! Application configuration.
//!
//! Sources, lowest precedence first: built-in defaults, the YAML file, then
//! `CMDSERVER_`-prefixed environment variables (`__` separates nested keys,
//! e.g. `CMDSERVER_MQTT__IP`).

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use figment::Figment;
use figment::providers::{Env, Format, Yaml};
use serde::Deserialize;

use pjlib::jvc::ProjectorConfig;
use pjlib::mqtt::MqttSettings;

pub const ENV_PREFIX: &str = "CMDSERVER_";
pub const CONFIG_HOME_VAR: &str = "CMDSERVER_CONFIG_HOME";
pub const CONFIG_FILE: &str = "cmdserver.yml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    #[serde(rename = "debugLogging", alias = "debuglogging")]
    pub debug_logging: bool,
    /// Projector host. Absent or empty disables the projector.
    pub pjip: Option<String>,
    pub pjport: Option<u16>,
    pub pjmacros: HashMap<String, Vec<String>>,
    pub mqtt: Option<MqttSettings>,
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self> {
        Figment::new()
            .merge(Yaml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .with_context(|| format!("Failed to load configuration from {}", path.display()))
    }

    /// Projector settings for the controller builder.
    pub fn projector(&self) -> ProjectorConfig {
        let defaults = ProjectorConfig::default();
        ProjectorConfig {
            host: self.pjip.clone().filter(|host| !host.trim().is_empty()),
            port: self.pjport.unwrap_or(defaults.port),
            macros: self.pjmacros.clone(),
            ..defaults
        }
    }
}

/// `$CMDSERVER_CONFIG_HOME/cmdserver.yml`, else `~/.cmdserver/cmdserver.yml`.
pub fn default_path() -> PathBuf {
    let home = std::env::var_os(CONFIG_HOME_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            std::env::var_os("HOME")
                .map(PathBuf::from)
                .unwrap_or_default()
                .join(".cmdserver")
        });
    home.join(CONFIG_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn missing_file_gives_disabled_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(&dir.path().join("absent.yml")).unwrap();
        assert!(config.pjip.is_none());
        assert!(config.mqtt.is_none());
        assert!(config.projector().host.is_none());
        assert_eq!(config.projector().port, 20554);
    }

    #[test]
    fn reads_original_key_names() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(
            &path,
            r#"
debugLogging: true
pjip: 192.168.1.60
pjmacros:
  AllOn:
    - Power.PowerState.LampOn
    - PAUSE1.0
    - Input.InputState.HDMI1
mqtt:
  ip: 192.168.1.2
  user: ha
  cred: secret
"#,
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert!(config.debug_logging);
        let projector = config.projector();
        assert_eq!(projector.host.as_deref(), Some("192.168.1.60"));
        assert_eq!(projector.macros["AllOn"].len(), 3);
        let mqtt = config.mqtt.unwrap();
        assert_eq!(mqtt.ip, "192.168.1.2");
        assert_eq!(mqtt.port, 1883);
        assert_eq!(mqtt.credentials(), Some(("ha", "secret")));
    }

    #[test]
    fn blank_host_disables_projector() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "pjip: ''\npjport: 20555\n").unwrap();

        let projector = AppConfig::load(&path).unwrap().projector();
        assert!(projector.host.is_none());
        assert_eq!(projector.port, 20555);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "pjport: not-a-port\n").unwrap();
        assert!(AppConfig::load(&path).is_err());
    }
}
