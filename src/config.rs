use crate::{
    constants::{
        BOOK_LIST_CACHE_DIR, BOOK_LIST_CACHE_SECS, DEFAULT_ENGINE, DEFAULT_SERVER,
        KEEP_TEMP_FILES, PUBLISH_URL, TMP_DIR,
    },
    cookie::CookieAlphabet,
    debug::{DebugMode, DebugSettings},
    error::ConfigError,
    profile::{PageProfile, ServerProfile, TextDirection},
    url::UrlSettings,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, path::Path, time::Duration};
use tracing::{debug, info};

const HOSTNAME_PATTERN: &str = r"^[A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])?(\.[A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])?)*(:[0-9]{1,5})?$";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CacheSettings {
    /// How long a fetched book list stays valid.
    pub book_list_secs: u64,
    pub dir: String,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            book_list_secs: BOOK_LIST_CACHE_SECS,
            dir: BOOK_LIST_CACHE_DIR.to_string(),
        }
    }
}

impl CacheSettings {
    pub fn book_list_ttl(&self) -> Duration {
        Duration::from_secs(self.book_list_secs)
    }
}

/// Everything the fetcher, paginator and renderer read.
///
/// Built once at startup and shared by reference afterwards. Any section
/// missing from a config file keeps its built-in value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Written as an empty string when there is no fallback server.
    #[serde(with = "optional_host")]
    default_server: Option<String>,
    publish_url: String,
    keep_temp_files: bool,
    tmp_dir: String,
    chapter_cookie_chars: CookieAlphabet,
    cache: CacheSettings,
    urls: UrlSettings,
    servers: BTreeMap<String, ServerProfile>,
    page_sizes: BTreeMap<String, PageProfile>,
    engines: BTreeMap<String, Vec<String>>,
    debug: DebugSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Config {
    pub fn builtin() -> Self {
        Config {
            default_server: Some(DEFAULT_SERVER.to_string()),
            publish_url: PUBLISH_URL.to_string(),
            keep_temp_files: KEEP_TEMP_FILES,
            tmp_dir: TMP_DIR.to_string(),
            chapter_cookie_chars: CookieAlphabet::default(),
            cache: CacheSettings::default(),
            urls: UrlSettings::default(),
            servers: builtin_servers(),
            page_sizes: builtin_page_sizes(),
            engines: BTreeMap::from([(DEFAULT_ENGINE.to_string(), Vec::new())]),
            debug: DebugSettings::default(),
        }
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        info!("Loading configuration from: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;

        debug!(
            "Loaded configuration with {} servers and {} page sizes",
            config.servers.len(),
            config.page_sizes.len()
        );
        Ok(config)
    }

    /// Replaces the fallback server. `None` makes unknown hosts an error.
    pub fn with_default_server(mut self, host: Option<&str>) -> Result<Self, ConfigError> {
        self.default_server = host.map(str::to_string);
        self.validate()?;
        Ok(self)
    }

    pub fn with_server(mut self, host: &str, profile: ServerProfile) -> Result<Self, ConfigError> {
        self.servers.insert(host.to_string(), profile);
        self.validate()?;
        Ok(self)
    }

    pub fn with_page_size(mut self, name: &str, profile: PageProfile) -> Result<Self, ConfigError> {
        self.page_sizes.insert(name.to_string(), profile);
        self.validate()?;
        Ok(self)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.chapter_cookie_chars.validate()?;
        self.urls.validate()?;

        let hostname = Regex::new(HOSTNAME_PATTERN)?;
        for (host, profile) in &self.servers {
            if !hostname.is_match(host) {
                return Err(ConfigError::InvalidServerProfile {
                    host: host.clone(),
                    reason: "malformed hostname".to_string(),
                });
            }
            profile.validate(host)?;
        }

        if let Some(default) = &self.default_server {
            if !self.servers.contains_key(default) {
                return Err(ConfigError::InvalidDefaultServer(default.clone()));
            }
        }

        for (name, profile) in &self.page_sizes {
            profile.validate(name)?;
        }

        Ok(())
    }

    /// Profile for `hostname`, or the default server's profile when the host
    /// is not registered.
    pub fn get_server_profile(&self, hostname: &str) -> Result<&ServerProfile, ConfigError> {
        if let Some(profile) = self.servers.get(hostname) {
            return Ok(profile);
        }

        let fallback = self
            .default_server
            .as_ref()
            .and_then(|default| self.servers.get(default).map(|profile| (default, profile)));

        match fallback {
            Some((default, profile)) => {
                debug!("Server {} not registered, using {}", hostname, default);
                Ok(profile)
            }
            None => Err(ConfigError::UnknownServer(hostname.to_string())),
        }
    }

    pub fn get_page_profile(&self, name: &str) -> Result<&PageProfile, ConfigError> {
        self.page_sizes
            .get(name)
            .ok_or_else(|| ConfigError::UnknownPageSize(name.to_string()))
    }

    pub fn format_toc_url(&self, hostname: &str, book_path: &str) -> String {
        self.urls.toc.format(hostname, book_path)
    }

    pub fn format_book_url(&self, hostname: &str, book_path: &str) -> String {
        self.urls.book.format(hostname, book_path)
    }

    pub fn is_debug_enabled(&self, mode: DebugMode) -> bool {
        self.debug.is_enabled(mode)
    }

    pub fn engine_options(&self, engine: &str) -> Result<&[String], ConfigError> {
        self.engines
            .get(engine)
            .map(Vec::as_slice)
            .ok_or_else(|| ConfigError::UnknownEngine(engine.to_string()))
    }

    pub fn default_server(&self) -> Option<&str> {
        self.default_server.as_deref()
    }

    pub fn server_names(&self) -> Vec<&str> {
        self.servers.keys().map(String::as_str).collect()
    }

    pub fn page_size_names(&self) -> Vec<&str> {
        self.page_sizes.keys().map(String::as_str).collect()
    }

    pub fn engine_names(&self) -> Vec<&str> {
        self.engines.keys().map(String::as_str).collect()
    }

    pub fn cache(&self) -> &CacheSettings {
        &self.cache
    }

    pub fn chapter_cookie_chars(&self) -> &CookieAlphabet {
        &self.chapter_cookie_chars
    }

    pub fn publish_url(&self) -> &str {
        &self.publish_url
    }

    pub fn keep_temp_files(&self) -> bool {
        self.keep_temp_files
    }

    pub fn tmp_dir(&self) -> &Path {
        Path::new(&self.tmp_dir)
    }

    pub fn debug(&self) -> &DebugSettings {
        &self.debug
    }
}

mod optional_host {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(host: &Option<String>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(host.as_deref().unwrap_or(""))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
        let host = String::deserialize(deserializer)?;
        Ok(if host.trim().is_empty() { None } else { Some(host) })
    }
}

fn builtin_servers() -> BTreeMap<String, ServerProfile> {
    [
        ("en", TextDirection::Ltr),
        ("fr", TextDirection::Ltr),
        ("translate", TextDirection::Ltr),
        ("nl", TextDirection::Ltr),
        ("bn", TextDirection::Ltr),
        ("fa", TextDirection::Rtl),
    ]
    .into_iter()
    .map(|(lang, dir)| {
        let host = format!("{}.flossmanuals.net", lang);
        let profile = ServerProfile::new(format!("static/{}.css", host), lang, dir);
        (host, profile)
    })
    .collect()
}

fn builtin_page_sizes() -> BTreeMap<String, PageProfile> {
    BTreeMap::from([
        (
            "COMICBOOK".to_string(),
            PageProfile::from_inches("B5", [20.0, 30.0, 20.0, 30.0], [50.0, 40.0], 20.0, 6.625, 10.25),
        ),
        (
            "COMICBOOK2".to_string(),
            PageProfile::from_inches("A4", [45.0, 45.0, 45.0, 45.0], [50.0, 40.0], 20.0, 6.625, 10.25),
        ),
    ])
}
