pub mod config;
pub mod constants;
pub mod cookie;
pub mod debug;
pub mod error;
pub mod profile;
pub mod url;

pub use config::{CacheSettings, Config};
pub use cookie::CookieAlphabet;
pub use debug::{DebugMode, DebugSettings};
pub use error::ConfigError;
pub use profile::{PageProfile, ServerProfile, TextDirection};
pub use url::{UrlSettings, UrlTemplate};
