use serde::Deserialize;

/// Top-level configuration settings for the relay.
///
/// Includes settings for the HTTP listener and for logging.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Settings {
    pub server: ServerSettings,
    pub log: LogSettings,
}

/// Configuration settings for the server.
///
/// Defines the host and port the HTTP listener will bind to.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

/// Configuration settings for logging.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LogSettings {
    pub level: String,
}

/// Partial configuration settings loaded from files or environment.
///
/// Allows partial specification of settings. Missing values can be filled using defaults.
#[derive(Debug, Default, Deserialize)]
pub struct PartialSettings {
    pub server: Option<PartialServerSettings>,
    pub log: Option<PartialLogSettings>,
}

/// Partial server settings.
#[derive(Debug, Default, Deserialize)]
pub struct PartialServerSettings {
    pub host: Option<String>,
    pub port: Option<u16>,
}

/// Partial log settings.
#[derive(Debug, Default, Deserialize)]
pub struct PartialLogSettings {
    pub level: Option<String>,
}

/// Command-line overrides applied on top of every other source.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub log_level: Option<String>,
}

impl Settings {
    /// Address string handed to the listener, e.g. `0.0.0.0:5000`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Fills every field missing from `partial` with the value already held by `self`.
    pub fn merge(self, partial: PartialSettings) -> Self {
        let server = partial.server.unwrap_or_default();
        let log = partial.log.unwrap_or_default();

        Self {
            server: ServerSettings {
                host: server.host.unwrap_or(self.server.host),
                port: server.port.unwrap_or(self.server.port),
            },
            log: LogSettings {
                level: log.level.unwrap_or(self.log.level),
            },
        }
    }

    pub fn apply(self, overrides: Overrides) -> Self {
        self.merge(PartialSettings {
            server: Some(PartialServerSettings {
                host: overrides.host,
                port: overrides.port,
            }),
            log: Some(PartialLogSettings {
                level: overrides.log_level,
            }),
        })
    }
}

/// Listens on all interfaces, port 5000, logging at `info`.
impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerSettings {
                host: "0.0.0.0".to_string(),
                port: 5000,
            },
            log: LogSettings {
                level: "info".to_string(),
            },
        }
    }
}
