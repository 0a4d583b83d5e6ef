use crate::{
    constants::{BOOK_SLOT, BOOK_URL, SERVER_SLOT, TOC_URL},
    error::ConfigError,
};
use regex::Regex;
use serde::{Deserialize, Serialize};

const SLOT_PATTERN: &str = r"\{([^{}]*)\}";

/// A URL with one `{server}` slot and one `{book}` slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UrlTemplate(String);

impl UrlTemplate {
    pub fn new(template: impl Into<String>) -> Result<Self, ConfigError> {
        let template = Self(template.into());
        template.validate()?;
        Ok(template)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidUrlTemplate {
            template: self.0.clone(),
            reason,
        };

        let mut server_slots = 0;
        let mut book_slots = 0;
        for caps in Regex::new(SLOT_PATTERN)?.captures_iter(&self.0) {
            match &caps[1] {
                "server" => server_slots += 1,
                "book" => book_slots += 1,
                other => return Err(invalid(format!("unknown slot '{{{}}}'", other))),
            }
        }

        if server_slots != 1 {
            return Err(invalid(format!(
                "expected one {} slot, found {}",
                SERVER_SLOT, server_slots
            )));
        }
        if book_slots != 1 {
            return Err(invalid(format!(
                "expected one {} slot, found {}",
                BOOK_SLOT, book_slots
            )));
        }
        Ok(())
    }

    /// Substitutes both slots in a single pass, so values containing slot
    /// text are copied through verbatim.
    pub fn format(&self, server: &str, book: &str) -> String {
        let mut url = String::with_capacity(self.0.len() + server.len() + book.len());
        let mut rest = self.0.as_str();

        while let Some(start) = rest.find('{') {
            url.push_str(&rest[..start]);
            let tail = &rest[start..];
            if let Some(after) = tail.strip_prefix(SERVER_SLOT) {
                url.push_str(server);
                rest = after;
            } else if let Some(after) = tail.strip_prefix(BOOK_SLOT) {
                url.push_str(book);
                rest = after;
            } else {
                url.push('{');
                rest = &tail[1..];
            }
        }
        url.push_str(rest);
        url
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UrlSettings {
    /// Table of contents for a book.
    pub toc: UrlTemplate,
    /// Full text of a book.
    pub book: UrlTemplate,
}

impl Default for UrlSettings {
    fn default() -> Self {
        Self {
            toc: UrlTemplate(TOC_URL.to_string()),
            book: UrlTemplate(BOOK_URL.to_string()),
        }
    }
}

impl UrlSettings {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        self.toc.validate()?;
        self.book.validate()
    }
}
