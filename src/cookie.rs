use crate::{
    constants::{CHAPTER_COOKIE_CHARS, VOWELS},
    error::ConfigError,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Characters chapter cookies are built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CookieAlphabet(String);

impl CookieAlphabet {
    pub fn new(chars: impl Into<String>) -> Result<Self, ConfigError> {
        let alphabet = Self(chars.into());
        alphabet.validate()?;
        Ok(alphabet)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.0.is_empty() {
            return Err(ConfigError::InvalidCookieAlphabet("alphabet is empty".to_string()));
        }

        let mut seen = HashSet::new();
        for c in self.0.chars() {
            if !c.is_ascii_uppercase() {
                return Err(ConfigError::InvalidCookieAlphabet(format!(
                    "'{}' is not an upper-case ASCII letter",
                    c
                )));
            }
            if VOWELS.contains(c) {
                return Err(ConfigError::InvalidCookieAlphabet(format!(
                    "'{}' is a vowel",
                    c
                )));
            }
            if !seen.insert(c) {
                return Err(ConfigError::InvalidCookieAlphabet(format!(
                    "'{}' appears more than once",
                    c
                )));
            }
        }
        Ok(())
    }

    /// Cookie for chapter `n`. Bijective numbering, so `0` is the first
    /// letter and no two numbers share a cookie.
    pub fn encode(&self, n: u64) -> String {
        let chars: Vec<char> = self.0.chars().collect();
        if chars.is_empty() {
            return String::new();
        }

        let base = chars.len() as u128;
        let mut rest = n as u128 + 1;
        let mut cookie = Vec::new();
        while rest > 0 {
            rest -= 1;
            cookie.push(chars[(rest % base) as usize]);
            rest /= base;
        }
        cookie.iter().rev().collect()
    }

    pub fn is_cookie(&self, candidate: &str) -> bool {
        !candidate.is_empty() && candidate.chars().all(|c| self.0.contains(c))
    }
}

impl Default for CookieAlphabet {
    fn default() -> Self {
        Self(CHAPTER_COOKIE_CHARS.to_string())
    }
}
