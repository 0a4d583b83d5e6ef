use std::fmt;

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Serialize(toml::ser::Error),
    Pattern(regex::Error),
    UnknownServer(String),
    UnknownPageSize(String),
    UnknownEngine(String),
    UnknownDebugMode(String),
    InvalidDefaultServer(String),
    InvalidServerProfile { host: String, reason: String },
    InvalidPageProfile { name: String, reason: String },
    InvalidUrlTemplate { template: String, reason: String },
    InvalidCookieAlphabet(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "IO error: {}", err),
            ConfigError::Parse(err) => write!(f, "TOML parsing error: {}", err),
            ConfigError::Serialize(err) => write!(f, "TOML serialization error: {}", err),
            ConfigError::Pattern(err) => write!(f, "Validation pattern error: {}", err),
            ConfigError::UnknownServer(host) => {
                write!(f, "Unknown server '{}' and no default server configured", host)
            }
            ConfigError::UnknownPageSize(name) => write!(f, "Unknown page size: {}", name),
            ConfigError::UnknownEngine(name) => write!(f, "Unknown rendering engine: {}", name),
            ConfigError::UnknownDebugMode(name) => write!(f, "Unknown debug mode: {}", name),
            ConfigError::InvalidDefaultServer(host) => {
                write!(f, "Default server '{}' has no server profile", host)
            }
            ConfigError::InvalidServerProfile { host, reason } => {
                write!(f, "Invalid profile for server '{}': {}", host, reason)
            }
            ConfigError::InvalidPageProfile { name, reason } => {
                write!(f, "Invalid page size '{}': {}", name, reason)
            }
            ConfigError::InvalidUrlTemplate { template, reason } => {
                write!(f, "Invalid URL template '{}': {}", template, reason)
            }
            ConfigError::InvalidCookieAlphabet(reason) => {
                write!(f, "Invalid chapter cookie alphabet: {}", reason)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(err) => Some(err),
            ConfigError::Parse(err) => Some(err),
            ConfigError::Serialize(err) => Some(err),
            ConfigError::Pattern(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(err: toml::ser::Error) -> Self {
        ConfigError::Serialize(err)
    }
}

impl From<regex::Error> for ConfigError {
    fn from(err: regex::Error) -> Self {
        ConfigError::Pattern(err)
    }
}
