use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::{collections::BTreeSet, fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DebugMode {
    Startup,
    Index,
    PdfEdit,
    PdfGen,
    HtmlGen,
}

impl DebugMode {
    pub const ALL: [DebugMode; 5] = [
        DebugMode::Startup,
        DebugMode::Index,
        DebugMode::PdfEdit,
        DebugMode::PdfGen,
        DebugMode::HtmlGen,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DebugMode::Startup => "STARTUP",
            DebugMode::Index => "INDEX",
            DebugMode::PdfEdit => "PDFEDIT",
            DebugMode::PdfGen => "PDFGEN",
            DebugMode::HtmlGen => "HTMLGEN",
        }
    }
}

impl fmt::Display for DebugMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DebugMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DebugMode::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::UnknownDebugMode(s.to_string()))
    }
}

impl TryFrom<String> for DebugMode {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DebugMode> for String {
    fn from(mode: DebugMode) -> Self {
        mode.as_str().to_string()
    }
}

/// Enabled debug categories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DebugSettings {
    pub modes: BTreeSet<DebugMode>,
    pub all: bool,
}

impl DebugSettings {
    pub fn is_enabled(&self, mode: DebugMode) -> bool {
        self.all || self.modes.contains(&mode)
    }
}
