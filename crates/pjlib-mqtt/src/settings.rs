//! Broker connection settings.

use serde::{Deserialize, Serialize};

pub const DEFAULT_PORT: u16 = 1883;
pub const DEFAULT_TOPIC_PREFIX: &str = "cmdserver";

/// Where and how to connect to the broker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MqttSettings {
    /// Broker host name or address.
    pub ip: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub cred: Option<String>,
    /// Defaults to `cmdserver-<hostname>`.
    #[serde(default, alias = "clientid")]
    pub client_id: Option<String>,
    #[serde(default = "default_topic_prefix", alias = "topicprefix")]
    pub topic_prefix: String,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_topic_prefix() -> String {
    DEFAULT_TOPIC_PREFIX.to_string()
}

impl MqttSettings {
    pub fn new(ip: &str) -> Self {
        MqttSettings {
            ip: ip.to_string(),
            port: DEFAULT_PORT,
            user: None,
            cred: None,
            client_id: None,
            topic_prefix: default_topic_prefix(),
        }
    }

    /// The configured client id, or one derived from the host name.
    pub fn effective_client_id(&self) -> String {
        self.client_id
            .clone()
            .unwrap_or_else(|| format!("cmdserver-{}", local_hostname()))
    }

    /// Credentials, only when both user and password are set.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (&self.user, &self.cred) {
            (Some(user), Some(cred)) if !user.is_empty() && !cred.is_empty() => {
                Some((user.as_str(), cred.as_str()))
            }
            _ => None,
        }
    }
}

/// Kernel hostname first, since `$HOSTNAME` is a shell variable that
/// services rarely inherit.
fn local_hostname() -> String {
    first_hostname([
        std::fs::read_to_string("/proc/sys/kernel/hostname").ok(),
        std::fs::read_to_string("/etc/hostname").ok(),
        std::env::var("HOSTNAME").ok(),
    ])
}

fn first_hostname(candidates: impl IntoIterator<Item = Option<String>>) -> String {
    candidates
        .into_iter()
        .flatten()
        .map(|name| name.trim().to_string())
        .find(|name| !name.is_empty())
        .unwrap_or_else(|| "localhost".to_string())
}
