//! Bot configuration.
//!
//! Every setting has a default, may be set in an optional TOML file, and may
//! be overridden from the process environment (`SLIRCBOT_*` variables).
//! Environment overrides win over file values.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid value for {var}: {value:?}")]
    Env { var: String, value: String },
}

/// How the bot authenticates to the server, if at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMode {
    /// No authentication.
    #[default]
    None,
    /// Services identify after registration (`PRIVMSG NickServ :IDENTIFY ...`).
    Identify,
    /// Connection password before registration (`PASS ...`, Twitch-style token).
    Pass,
}

/// Bot configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Nick of the bot.
    pub nick: String,
    /// Server hostname.
    pub server: String,
    /// Server port.
    pub port: u16,
    /// Channels to join, in join order.
    pub channels: Vec<String>,
    /// Owner of the bot; receives side-channel copies of command usage.
    pub master: String,
    /// Bot username for registration.
    pub username: String,
    /// Bot's "real name" for registration.
    pub realname: String,
    /// Authentication flow.
    pub auth: AuthMode,
    /// Shared secret for the configured auth flow.
    pub secret: Option<String>,
    /// Receive buffer / maximum line length in bytes.
    pub recv_buffer: usize,
    /// Minimum spacing between lines of a multi-line reply, in milliseconds.
    /// Some gateways silently drop rapid repeats from one sender; 0 disables.
    pub send_gap_ms: u64,
    /// Parting text for the QUIT notification.
    pub quit_message: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            nick: "AvicBot".to_string(),
            server: "chat.freenode.net".to_string(),
            port: 6667,
            channels: vec!["##Avic".to_string(), "#cvn-sw".to_string()],
            master: "Avicennasis".to_string(),
            username: "AvicBot".to_string(),
            realname: "Avicennasis".to_string(),
            auth: AuthMode::None,
            secret: None,
            recv_buffer: 10240,
            send_gap_ms: 0,
            quit_message: "I have to leave now :(".to_string(),
        }
    }
}

impl Config {
    /// Load configuration: defaults, then the optional TOML file, then
    /// environment overrides.
    pub fn load<P: AsRef<Path>>(path: Option<P>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(p) => toml::from_str(&std::fs::read_to_string(p)?)?,
            None => Config::default(),
        };
        config.apply_overrides(|var| std::env::var(var).ok())?;
        Ok(config)
    }

    /// The `host:port` address to connect to.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.server, self.port)
    }

    /// Apply overrides from a variable lookup (the process environment in
    /// production; injectable for tests).
    fn apply_overrides<F>(&mut self, var: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = var("SLIRCBOT_NICK") {
            self.nick = v;
        }
        if let Some(v) = var("SLIRCBOT_SERVER") {
            self.server = v;
        }
        if let Some(v) = var("SLIRCBOT_PORT") {
            self.port = v.parse().map_err(|_| ConfigError::Env {
                var: "SLIRCBOT_PORT".to_string(),
                value: v,
            })?;
        }
        if let Some(v) = var("SLIRCBOT_CHANNELS") {
            self.channels = v
                .split(',')
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(str::to_string)
                .collect();
        }
        if let Some(v) = var("SLIRCBOT_MASTER") {
            self.master = v;
        }
        if let Some(v) = var("SLIRCBOT_USERNAME") {
            self.username = v;
        }
        if let Some(v) = var("SLIRCBOT_REALNAME") {
            self.realname = v;
        }
        if let Some(v) = var("SLIRCBOT_AUTH") {
            self.auth = match v.to_ascii_lowercase().as_str() {
                "none" => AuthMode::None,
                "identify" => AuthMode::Identify,
                "pass" => AuthMode::Pass,
                _ => {
                    return Err(ConfigError::Env {
                        var: "SLIRCBOT_AUTH".to_string(),
                        value: v,
                    });
                }
            };
        }
        if let Some(v) = var("SLIRCBOT_SECRET") {
            self.secret = Some(v);
        }
        if let Some(v) = var("SLIRCBOT_RECV_BUFFER") {
            self.recv_buffer = v.parse().map_err(|_| ConfigError::Env {
                var: "SLIRCBOT_RECV_BUFFER".to_string(),
                value: v,
            })?;
        }
        if let Some(v) = var("SLIRCBOT_SEND_GAP_MS") {
            self.send_gap_ms = v.parse().map_err(|_| ConfigError::Env {
                var: "SLIRCBOT_SEND_GAP_MS".to_string(),
                value: v,
            })?;
        }
        if let Some(v) = var("SLIRCBOT_QUIT_MESSAGE") {
            self.quit_message = v;
        }
        Ok(())
    }
}
