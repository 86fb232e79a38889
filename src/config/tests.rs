use super::{AppConfig, DEFAULT_TICK_MS, MAX_TICK_MS, MIN_TICK_MS};
use crate::i18n::Language;
use clap::Parser;
use std::path::PathBuf;

#[test]
fn defaults_are_host_attached_english() {
    let cfg = AppConfig::parse_from(["test-app"]);
    assert!(!cfg.standalone);
    assert_eq!(cfg.initial_language(), Language::En);
    assert_eq!(cfg.tick_ms(), DEFAULT_TICK_MS);
    assert!(!cfg.file_logging_enabled());
}

#[test]
fn lang_flag_selects_supported_languages() {
    let cfg = AppConfig::parse_from(["test-app", "--lang", "he"]);
    assert_eq!(cfg.initial_language(), Language::He);
    let cfg = AppConfig::parse_from(["test-app", "--lang", "ja"]);
    assert_eq!(cfg.initial_language(), Language::Ja);
}

#[test]
fn unknown_lang_falls_back_to_english() {
    let cfg = AppConfig::parse_from(["test-app", "--lang", "pt-BR"]);
    assert_eq!(cfg.initial_language(), Language::En);
}

#[test]
fn tick_ms_is_clamped() {
    let cfg = AppConfig::parse_from(["test-app", "--tick-ms", "0"]);
    assert_eq!(cfg.tick_ms(), MIN_TICK_MS);
    let cfg = AppConfig::parse_from(["test-app", "--tick-ms", "999999"]);
    assert_eq!(cfg.tick_ms(), MAX_TICK_MS);
    let cfg = AppConfig::parse_from(["test-app", "--tick-ms", "100"]);
    assert_eq!(cfg.tick_ms(), 100);
}

#[test]
fn logs_flag_enables_file_logging() {
    let cfg = AppConfig::parse_from(["test-app", "--logs"]);
    assert!(cfg.file_logging_enabled());
}

#[test]
fn log_file_implies_logging() {
    let cfg = AppConfig::parse_from(["test-app", "--log-file", "/tmp/menu.log"]);
    assert!(cfg.file_logging_enabled());
    assert_eq!(cfg.log_file, Some(PathBuf::from("/tmp/menu.log")));
}

#[test]
fn no_logs_overrides_everything() {
    let cfg = AppConfig::parse_from(["test-app", "--logs", "--log-file", "/tmp/menu.log", "--no-logs"]);
    assert!(!cfg.file_logging_enabled());
}

#[test]
fn validate_accepts_well_formed_tags() {
    for lang in ["en", "he", "ja", "en-US", "pt_BR", "auto"] {
        let cfg = AppConfig::parse_from(["test-app", "--lang", lang]);
        assert!(cfg.validate().is_ok(), "rejected {lang:?}");
    }
}

#[test]
fn validate_rejects_malformed_tags() {
    for lang in ["", "en$", "he;rm", "ja ja"] {
        let cfg = AppConfig::parse_from(["test-app", "--lang", lang]);
        assert!(cfg.validate().is_err(), "accepted {lang:?}");
    }
}

#[test]
fn standalone_flag_parses() {
    let cfg = AppConfig::parse_from(["test-app", "--standalone"]);
    assert!(cfg.standalone);
}
