//! UI configuration.
//!
//! Defaults cover the normal case of the UI being served by the daemon
//! itself. Overrides come from the page query string, already decoded into
//! key/value pairs by the caller.

use std::str::FromStr;

use log::LevelFilter;

use crate::error::ConfigError;

/// Default host element selector.
pub const DEFAULT_HOST_SELECTOR: &str = "#app";

/// Daemon WebSocket path, relative to the page host.
pub const WEBSOCKET_PATH: &str = "/api/websocket";

/// Default delay before reconnecting a dropped daemon socket.
pub const DEFAULT_RECONNECT_DELAY_MS: u32 = 2_000;

/// Shortest accepted reconnect delay.
pub const MIN_RECONNECT_DELAY_MS: u32 = 100;

/// Query string keys understood by [`UiConfig::apply`].
pub const QUERY_KEYS: [&str; 4] = ["host", "daemon", "log", "reconnect"];

/// Runtime configuration for the web UI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiConfig {
    /// Selector of the element the application mounts onto
    pub host_selector: String,
    /// Explicit daemon socket URL; derived from the page location when unset
    pub daemon_url: Option<String>,
    /// Console log level
    pub log_level: LevelFilter,
    /// Delay before reconnecting the daemon socket
    pub reconnect_delay_ms: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            host_selector: DEFAULT_HOST_SELECTOR.to_string(),
            daemon_url: None,
            log_level: LevelFilter::Info,
            reconnect_delay_ms: DEFAULT_RECONNECT_DELAY_MS,
        }
    }
}

impl UiConfig {
    /// Build a config from decoded query pairs, starting from defaults.
    ///
    /// Recognised keys: `host`, `daemon`, `log`, `reconnect`. Unknown keys
    /// are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut config = Self::default();
        for (key, value) in pairs {
            config.apply(key.as_ref(), value.as_ref())?;
        }
        Ok(config)
    }

    /// Apply a single override.
    pub fn apply(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "host" if !value.is_empty() => self.host_selector = value.to_string(),
            "daemon" if !value.is_empty() => self.daemon_url = Some(value.to_string()),
            "log" => {
                self.log_level = LevelFilter::from_str(value)
                    .map_err(|_| ConfigError::InvalidLogLevel(value.to_string()))?;
            }
            "reconnect" => {
                self.reconnect_delay_ms = value
                    .parse()
                    .ok()
                    .filter(|delay| *delay >= MIN_RECONNECT_DELAY_MS)
                    .ok_or_else(|| ConfigError::InvalidNumber {
                        key: key.to_string(),
                        value: value.to_string(),
                    })?;
            }
            _ => {}
        }
        Ok(())
    }

    /// Daemon socket URL, derived from the page's protocol and host unless
    /// configured explicitly.
    pub fn socket_url(&self, page_protocol: &str, page_host: &str) -> String {
        if let Some(url) = &self.daemon_url {
            return url.clone();
        }
        let scheme = if page_protocol == "https:" { "wss" } else { "ws" };
        format!("{}://{}{}", scheme, page_host, WEBSOCKET_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = UiConfig::default();
        assert_eq!(config.host_selector, "#app");
        assert_eq!(config.log_level, LevelFilter::Info);
        assert_eq!(config.reconnect_delay_ms, 2_000);
        assert!(config.daemon_url.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = UiConfig::from_pairs([
            ("log", "debug"),
            ("host", "#root"),
            ("reconnect", "500"),
            ("theme", "dark"),
        ])
        .unwrap();
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.host_selector, "#root");
        assert_eq!(config.reconnect_delay_ms, 500);
    }

    #[test]
    fn test_empty_host_keeps_default() {
        let config = UiConfig::from_pairs([("host", "")]).unwrap();
        assert_eq!(config.host_selector, "#app");
    }

    #[test]
    fn test_invalid_values() {
        assert_eq!(
            UiConfig::from_pairs([("log", "loud")]),
            Err(ConfigError::InvalidLogLevel("loud".into()))
        );
        assert!(matches!(
            UiConfig::from_pairs([("reconnect", "-1")]),
            Err(ConfigError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn test_reconnect_delay_floor() {
        assert_eq!(
            UiConfig::from_pairs([("reconnect", "0")]),
            Err(ConfigError::InvalidNumber {
                key: "reconnect".into(),
                value: "0".into(),
            })
        );
        assert!(UiConfig::from_pairs([("reconnect", "99")]).is_err());
        let config = UiConfig::from_pairs([("reconnect", "100")]).unwrap();
        assert_eq!(config.reconnect_delay_ms, MIN_RECONNECT_DELAY_MS);
    }

    #[test]
    fn test_daemon_url() {
        let config = UiConfig::default();
        assert_eq!(
            config.socket_url("http:", "localhost:14564"),
            "ws://localhost:14564/api/websocket"
        );
        assert_eq!(
            config.socket_url("https:", "goxlr.local"),
            "wss://goxlr.local/api/websocket"
        );

        let config =
            UiConfig::from_pairs([("daemon", "ws://10.0.0.2:14564/api/websocket")]).unwrap();
        assert_eq!(
            config.socket_url("http:", "localhost"),
            "ws://10.0.0.2:14564/api/websocket"
        );
    }
}
