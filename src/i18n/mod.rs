//! Localization tables and the resolved translation context.
//!
//! Every supported language carries a complete, structurally identical
//! [`Translation`] table, so lookup is O(1) and can never yield a partial
//! record. Direction is derived from the language on every resolve and is
//! never stored on its own.

use serde::Deserialize;

/// Supported UI languages.
///
/// Wire tags match the host protocol: `"en"`, `"he"`, `"ja"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    En,
    #[serde(rename = "he")]
    He,
    #[serde(rename = "ja")]
    Ja,
}

/// Text layout direction, derived from [`Language`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

impl Direction {
    /// Attribute value as exposed to the presentation layer.
    pub fn attr(&self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }
}

impl Language {
    /// Parse a host-supplied language tag. Unknown tags fall back to English
    /// rather than failing; the channel is permissive by design.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "en" => Self::En,
            "he" => Self::He,
            "ja" => Self::Ja,
            _ => Self::En,
        }
    }

    /// Language tag as exposed to the presentation layer.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::He => "he",
            Self::Ja => "ja",
        }
    }

    /// Display direction: Hebrew lays out right-to-left, everything else LTR.
    pub fn direction(&self) -> Direction {
        match self {
            Self::He => Direction::Rtl,
            Self::En | Self::Ja => Direction::Ltr,
        }
    }

    /// Name of the language in the language itself.
    pub fn native_name(&self) -> &'static str {
        match self {
            Self::En => "English",
            Self::He => "עברית",
            Self::Ja => "日本語",
        }
    }
}

/// Display strings for one language. Same shape for every language.
#[derive(Debug)]
pub struct Translation {
    // Status section
    pub connection_label: &'static str,
    pub app_status_label: &'static str,
    pub connected: &'static str,
    pub disconnected: &'static str,
    pub connecting: &'static str,
    pub ready: &'static str,
    pub initializing: &'static str,
    pub error: &'static str,

    // Action buttons
    pub refresh: &'static str,
    pub settings: &'static str,
    pub about: &'static str,
    pub exit: &'static str,
}

const EN: Translation = Translation {
    connection_label: "Connection:",
    app_status_label: "App status:",
    connected: "Connected",
    disconnected: "Disconnected",
    connecting: "Connecting",
    ready: "Ready",
    initializing: "Initializing",
    error: "Error",
    refresh: "Refresh",
    settings: "Settings",
    about: "About",
    exit: "Exit",
};

const HE: Translation = Translation {
    connection_label: "חיבור:",
    app_status_label: "סטטוס האפליקציה:",
    connected: "מחובר",
    disconnected: "מנותק",
    connecting: "מתחבר",
    ready: "מוכן",
    initializing: "אתחול",
    error: "שגיאה",
    refresh: "רענן",
    settings: "הגדרות",
    about: "אודות",
    exit: "יציאה",
};

const JA: Translation = Translation {
    connection_label: "接続:",
    app_status_label: "アプリ状態:",
    connected: "接続済み",
    disconnected: "切断",
    connecting: "接続中",
    ready: "準備完了",
    initializing: "初期化中",
    error: "エラー",
    refresh: "更新",
    settings: "設定",
    about: "バージョン情報",
    exit: "終了",
};

/// A language resolved together with its translation table and direction.
///
/// The only constructor is [`Locale::resolve`], so a consumer can never hold
/// a (language, translation) pair that disagrees.
#[derive(Debug, Clone, Copy)]
pub struct Locale {
    pub language: Language,
    pub translation: &'static Translation,
    pub direction: Direction,
}

impl Locale {
    /// Look up the full translation context for a language. Total: every
    /// variant has a complete table.
    pub fn resolve(language: Language) -> Self {
        let translation = match language {
            Language::En => &EN,
            Language::He => &HE,
            Language::Ja => &JA,
        };
        Self {
            language,
            translation,
            direction: language.direction(),
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::resolve(Language::En)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_strings(t: &Translation) -> [&'static str; 12] {
        [
            t.connection_label,
            t.app_status_label,
            t.connected,
            t.disconnected,
            t.connecting,
            t.ready,
            t.initializing,
            t.error,
            t.refresh,
            t.settings,
            t.about,
            t.exit,
        ]
    }

    #[test]
    fn every_language_has_complete_translation() {
        for language in [Language::En, Language::He, Language::Ja] {
            let locale = Locale::resolve(language);
            for s in all_strings(locale.translation) {
                assert!(!s.is_empty(), "empty string in {language:?} table");
            }
        }
    }

    #[test]
    fn hebrew_is_rtl_others_ltr() {
        assert_eq!(Locale::resolve(Language::He).direction, Direction::Rtl);
        assert_eq!(Locale::resolve(Language::En).direction, Direction::Ltr);
        assert_eq!(Locale::resolve(Language::Ja).direction, Direction::Ltr);
    }

    #[test]
    fn direction_attr_values() {
        assert_eq!(Direction::Ltr.attr(), "ltr");
        assert_eq!(Direction::Rtl.attr(), "rtl");
    }

    #[test]
    fn from_tag_parses_known_languages() {
        assert_eq!(Language::from_tag("en"), Language::En);
        assert_eq!(Language::from_tag("he"), Language::He);
        assert_eq!(Language::from_tag("ja"), Language::Ja);
    }

    #[test]
    fn from_tag_unknown_falls_back_to_english() {
        let fallback = Locale::resolve(Language::from_tag("fr"));
        let english = Locale::resolve(Language::En);
        assert_eq!(fallback.language, english.language);
        assert!(std::ptr::eq(fallback.translation, english.translation));
        assert_eq!(fallback.direction, english.direction);
    }

    #[test]
    fn resolve_is_idempotent() {
        let first = Locale::resolve(Language::Ja);
        let second = Locale::resolve(Language::Ja);
        assert!(std::ptr::eq(first.translation, second.translation));
        assert_eq!(first.direction, second.direction);
    }

    #[test]
    fn language_tags_round_trip() {
        for language in [Language::En, Language::He, Language::Ja] {
            assert_eq!(Language::from_tag(language.tag()), language);
        }
    }

    #[test]
    fn native_names_are_localized() {
        assert_eq!(Language::En.native_name(), "English");
        assert_eq!(Language::He.native_name(), "עברית");
        assert_eq!(Language::Ja.native_name(), "日本語");
    }

    #[test]
    fn deserialize_language_tags() {
        let language: Language = serde_json::from_str(r#""he""#).unwrap();
        assert_eq!(language, Language::He);
        assert!(serde_json::from_str::<Language>(r#""fr""#).is_err());
    }
}
