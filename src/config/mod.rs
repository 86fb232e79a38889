//! Command-line parsing and validation helpers.

#[cfg(test)]
mod tests;

use anyhow::bail;
use clap::Parser;
use std::path::PathBuf;

use crate::i18n::Language;

pub const DEFAULT_TICK_MS: u64 = 250;
pub const MIN_TICK_MS: u64 = 16;
pub const MAX_TICK_MS: u64 = 5_000;

/// CLI options for the hostmenu UI.
#[derive(Debug, Parser, Clone)]
#[command(about = "Host-embedded context menu", author, version)]
pub struct AppConfig {
    /// Run without a host: no stdin listener, notifications are dropped
    #[arg(long, default_value_t = false)]
    pub standalone: bool,

    /// Initial language tag (en, he, ja); unknown tags fall back to en
    #[arg(long, default_value = "en")]
    pub lang: String,

    /// Render tick interval (milliseconds)
    #[arg(long = "tick-ms", default_value_t = DEFAULT_TICK_MS)]
    pub tick_ms: u64,

    /// Enable file logging (debug)
    #[arg(long = "logs", env = "HOSTMENU_LOGS", default_value_t = false)]
    pub logs: bool,

    /// Disable all file logging (overrides --logs and log env vars)
    #[arg(long = "no-logs", env = "HOSTMENU_NO_LOGS", default_value_t = false)]
    pub no_logs: bool,

    /// Log file location (implies --logs)
    #[arg(long = "log-file", env = "HOSTMENU_LOG")]
    pub log_file: Option<PathBuf>,
}

impl AppConfig {
    /// Check flag values clap cannot express. Language tags are shape-checked
    /// only; an unknown but well-formed tag still falls back to English.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.lang.is_empty()
            || !self
                .lang
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            bail!("invalid language tag: {:?}", self.lang);
        }
        Ok(())
    }

    /// Language the session starts in, before any host update arrives.
    pub fn initial_language(&self) -> Language {
        Language::from_tag(&self.lang)
    }

    /// Tick interval clamped to a sane range. The UI stays responsive even
    /// if a wrapper script passes 0 or something absurd.
    pub fn tick_ms(&self) -> u64 {
        self.tick_ms.clamp(MIN_TICK_MS, MAX_TICK_MS)
    }

    /// Whether file logging is active after resolving the overrides.
    pub fn file_logging_enabled(&self) -> bool {
        if self.no_logs {
            return false;
        }
        self.logs || self.log_file.is_some()
    }
}
