use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Connection settings for the bundled connector.
///
/// Every field has a default, so a partial config deserializes fine:
///
/// ```ignore
/// let config: ClientConfig = serde_json::from_str(r#"{"read_timeout_secs": 60}"#)?;
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub connect_timeout_secs: u64,
    pub read_timeout_secs: u64,
    pub write_timeout_secs: u64,
    /// 0 returns 3xx responses to the caller instead of following them.
    pub max_redirects: u32,
    /// When false, no connection is kept for reuse after a call.
    pub keep_alive: bool,
    pub user_agent: Option<String>,
}

impl ClientConfig {
    /// Defaults, with both read and write timeouts set to `timeout_secs`.
    pub fn with_timeout(timeout_secs: u64) -> Self {
        Self {
            read_timeout_secs: timeout_secs,
            write_timeout_secs: timeout_secs,
            ..Self::default()
        }
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_secs(self.read_timeout_secs)
    }

    pub fn write_timeout(&self) -> Duration {
        Duration::from_secs(self.write_timeout_secs)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 5,
            read_timeout_secs: 30,
            write_timeout_secs: 30,
            max_redirects: 5,
            keep_alive: true,
            user_agent: None,
        }
    }
}
