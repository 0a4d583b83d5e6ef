use crate::{
    constants::{POINTS_PER_INCH, mm_to_pt, pt_to_mm},
    error::ConfigError,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

const LANG_PATTERN: &str = r"^[a-z]+(-[A-Za-z0-9]+)*$";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextDirection {
    #[serde(rename = "LTR")]
    Ltr,
    // Older configs spell right-to-left as RTR
    #[serde(rename = "RTL", alias = "RTR")]
    Rtl,
}

impl TextDirection {
    /// Value for an HTML `dir` attribute.
    pub fn as_html(&self) -> &'static str {
        match self {
            TextDirection::Ltr => "ltr",
            TextDirection::Rtl => "rtl",
        }
    }

    pub fn is_rtl(&self) -> bool {
        matches!(self, TextDirection::Rtl)
    }
}

impl fmt::Display for TextDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextDirection::Ltr => write!(f, "LTR"),
            TextDirection::Rtl => write!(f, "RTL"),
        }
    }
}

/// Locale and styling for books fetched from one server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerProfile {
    /// Stylesheet applied when rendering this server's books.
    pub css: String,
    pub lang: String,
    pub dir: TextDirection,
}

impl ServerProfile {
    pub fn new(css: impl Into<String>, lang: impl Into<String>, dir: TextDirection) -> Self {
        Self {
            css: css.into(),
            lang: lang.into(),
            dir,
        }
    }

    pub(crate) fn validate(&self, host: &str) -> Result<(), ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidServerProfile {
            host: host.to_string(),
            reason,
        };

        if self.css.trim().is_empty() {
            return Err(invalid("empty stylesheet path".to_string()));
        }
        if self.lang.is_empty() {
            return Err(invalid("empty language code".to_string()));
        }
        if !Regex::new(LANG_PATTERN)?.is_match(&self.lang) {
            return Err(invalid(format!("malformed language code '{}'", self.lang)));
        }
        Ok(())
    }
}

/// Page geometry handed to the PDF engine.
///
/// Margins are in millimetres, clockwise from the top. Everything else is in
/// points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageProfile {
    /// Paper size name understood by the rendering engine.
    pub wksize: String,
    pub wkmargins: [f64; 4],
    /// Page number stamp position, measured from the corner after resizing.
    pub numberpos: [f64; 2],
    /// How far each page is shifted left or right.
    pub shift: f64,
    pub pointsize: [f64; 2],
}

impl PageProfile {
    /// Builds a profile whose dimensions are given in inches.
    pub fn from_inches(
        wksize: impl Into<String>,
        wkmargins: [f64; 4],
        numberpos: [f64; 2],
        shift: f64,
        width_in: f64,
        height_in: f64,
    ) -> Self {
        Self {
            wksize: wksize.into(),
            wkmargins,
            numberpos,
            shift,
            pointsize: [width_in * POINTS_PER_INCH, height_in * POINTS_PER_INCH],
        }
    }

    pub fn width_pt(&self) -> f64 {
        self.pointsize[0]
    }

    pub fn height_pt(&self) -> f64 {
        self.pointsize[1]
    }

    pub fn width_mm(&self) -> f64 {
        pt_to_mm(self.width_pt())
    }

    pub fn height_mm(&self) -> f64 {
        pt_to_mm(self.height_pt())
    }

    pub fn margins_pt(&self) -> [f64; 4] {
        self.wkmargins.map(mm_to_pt)
    }

    pub(crate) fn validate(&self, name: &str) -> Result<(), ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidPageProfile {
            name: name.to_string(),
            reason,
        };

        if self.wksize.trim().is_empty() {
            return Err(invalid("empty paper size".to_string()));
        }
        if let Some(m) = self
            .wkmargins
            .iter()
            .find(|m| !m.is_finite() || **m < 0.0)
        {
            return Err(invalid(format!("margin {} is negative or not finite", m)));
        }
        if let Some(p) = self.numberpos.iter().find(|p| !p.is_finite()) {
            return Err(invalid(format!("number position {} is not finite", p)));
        }
        if !self.shift.is_finite() {
            return Err(invalid("page shift is not finite".to_string()));
        }
        if let Some(d) = self.pointsize.iter().find(|d| !d.is_finite() || **d <= 0.0) {
            return Err(invalid(format!("page dimension {} is not positive", d)));
        }
        Ok(())
    }
}
