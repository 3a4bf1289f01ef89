//! Configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use actionsheet_sdk::types::DeviceIdiom;
use anyhow::{Context, Result, anyhow};
use tracing::warn;

/// URL length above which bookmarking and reading-list entries are hidden.
pub const DEFAULT_URL_LENGTH_MAX: usize = 65536;

/// Composer and presenter configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// URLs longer than this many bytes are "too long" (default: 65536).
    pub url_length_max: usize,

    /// Device layout class: "phone" or "pad" (default: "phone").
    pub idiom: DeviceIdiom,

    /// Never present as a popover, even on pad layouts (default: false).
    pub suppress_popover: bool,

    /// Optional gettext .po file with translated menu strings.
    pub translations: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url_length_max: DEFAULT_URL_LENGTH_MAX,
            idiom: DeviceIdiom::Phone,
            suppress_popover: false,
            translations: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let url_length_max = env::var("ACTIONSHEET_URL_LENGTH_MAX")
            .unwrap_or_else(|_| DEFAULT_URL_LENGTH_MAX.to_string())
            .parse()
            .context("ACTIONSHEET_URL_LENGTH_MAX must be a valid usize")?;

        let idiom = env::var("ACTIONSHEET_IDIOM")
            .unwrap_or_else(|_| "phone".to_string())
            .parse::<DeviceIdiom>()
            .map_err(|e| anyhow!(e))
            .context("ACTIONSHEET_IDIOM must be \"phone\" or \"pad\"")?;

        let suppress_popover = match env::var("ACTIONSHEET_SUPPRESS_POPOVER") {
            Ok(v) => parse_flag(&v).unwrap_or_else(|| {
                warn!(value = %v, "ignoring unparseable ACTIONSHEET_SUPPRESS_POPOVER");
                false
            }),
            Err(_) => false,
        };

        let translations = env::var("ACTIONSHEET_TRANSLATIONS")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            url_length_max,
            idiom,
            suppress_popover,
            translations,
        })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
