//! Serde-friendly projector settings.

use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::builder::ControllerBuilder;
use crate::connection::DEFAULT_PORT;

/// Projector connection settings and macro table.
///
/// Every field is optional in serialised form; a config without `host`
/// yields a disabled controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectorConfig {
    pub host: Option<String>,
    pub port: u16,
    /// Macro name to ordered dotted commands.
    pub macros: HashMap<String, Vec<String>>,
    pub disconnect_delay_ms: Option<u64>,
    pub connect_timeout_ms: Option<u64>,
}

impl Default for ProjectorConfig {
    fn default() -> Self {
        ProjectorConfig {
            host: None,
            port: DEFAULT_PORT,
            macros: HashMap::new(),
            disconnect_delay_ms: None,
            connect_timeout_ms: None,
        }
    }
}

impl ProjectorConfig {
    /// A builder carrying these settings.
    pub fn builder(&self) -> ControllerBuilder {
        let mut builder = ControllerBuilder::new()
            .port(self.port)
            .macros(self.macros.clone());
        if let Some(host) = &self.host {
            builder = builder.host(host);
        }
        if let Some(ms) = self.disconnect_delay_ms {
            builder = builder.disconnect_delay(Duration::from_millis(ms));
        }
        if let Some(ms) = self.connect_timeout_ms {
            builder = builder.connect_timeout(Duration::from_millis(ms));
        }
        builder
    }
}

impl From<&ProjectorConfig> for ControllerBuilder {
    fn from(config: &ProjectorConfig) -> Self {
        config.builder()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_gives_defaults() {
        let config: ProjectorConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ProjectorConfig::default());
        assert_eq!(config.port, 20554);
        assert!(!config.builder().build().enabled());
    }

    #[test]
    fn camel_case_keys() {
        let config: ProjectorConfig = serde_json::from_str(
            r#"{
                "host": "10.0.0.9",
                "port": 20555,
                "macros": {"Scope": ["Anamorphic.Anamorphic.A"]},
                "disconnectDelayMs": 250,
                "connectTimeoutMs": 2000
            }"#,
        )
        .unwrap();
        assert_eq!(config.host.as_deref(), Some("10.0.0.9"));
        assert_eq!(config.port, 20555);
        assert_eq!(config.macros["Scope"], vec!["Anamorphic.Anamorphic.A"]);
        assert_eq!(config.disconnect_delay_ms, Some(250));
        assert_eq!(config.connect_timeout_ms, Some(2000));
    }

    #[tokio::test]
    async fn host_enables_controller() {
        let config = ProjectorConfig {
            host: Some("127.0.0.1".into()),
            ..Default::default()
        };
        assert!(ControllerBuilder::from(&config).build().enabled());
    }
}
