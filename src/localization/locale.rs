use crate::models::OutputLanguage;
use std::env;

pub struct LocaleDetector;

const LOCALE_VARS: [&str; 4] = ["LC_ALL", "LC_MESSAGES", "LANG", "LANGUAGE"];

impl LocaleDetector {
    /// Detect the system locale and return the matching OutputLanguage
    pub fn detect_system_locale() -> OutputLanguage {
        for var in &LOCALE_VARS {
            if let Ok(locale) = env::var(var) {
                if let Some(lang) = Self::parse_locale(&locale) {
                    return lang;
                }
            }
        }

        OutputLanguage::English
    }

    /// Map a locale string (`vi_VN.UTF-8`, `Vietnamese_Vietnam.1258`, `C`) to a language.
    pub(crate) fn parse_locale(locale: &str) -> Option<OutputLanguage> {
        let locale_lower = locale.to_lowercase();

        if locale_lower.starts_with("vi")
            || locale_lower.contains("vietnamese")
            || locale_lower.contains("vietnam")
        {
            return Some(OutputLanguage::Vietnamese);
        }

        if locale_lower.starts_with("en")
            || locale_lower.contains("english")
            || locale_lower.starts_with("c.")
            || locale_lower == "c"
            || locale_lower == "posix"
        {
            return Some(OutputLanguage::English);
        }

        None
    }

    /// Current locale variables, for debug output
    pub fn get_system_locale_info() -> String {
        LOCALE_VARS
            .iter()
            .map(|var| match env::var(var) {
                Ok(value) => format!("{}={}", var, value),
                Err(_) => format!("{}=(not set)", var),
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}
