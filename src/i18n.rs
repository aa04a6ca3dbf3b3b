use dioxus_i18n::prelude::*;
use unic_langid::{langid, LanguageIdentifier};

const EN_US: &str = include_str!("../locales/en-US.ftl");
const HI_IN: &str = include_str!("../locales/hi-IN.ftl");

/// Languages offered on the language selection screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    Hindi,
    Bengali,
    Telugu,
    Marathi,
    Tamil,
    Gujarati,
    Kannada,
    Malayalam,
    Punjabi,
    Odia,
    Assamese,
    #[default]
    English,
}

impl Language {
    /// Display order of the selection grid
    pub const ALL: [Language; 12] = [
        Language::Hindi,
        Language::Bengali,
        Language::Telugu,
        Language::Marathi,
        Language::Tamil,
        Language::Gujarati,
        Language::Kannada,
        Language::Malayalam,
        Language::Punjabi,
        Language::Odia,
        Language::Assamese,
        Language::English,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Language::Hindi => "hi",
            Language::Bengali => "bn",
            Language::Telugu => "te",
            Language::Marathi => "mr",
            Language::Tamil => "ta",
            Language::Gujarati => "gu",
            Language::Kannada => "kn",
            Language::Malayalam => "ml",
            Language::Punjabi => "pa",
            Language::Odia => "or",
            Language::Assamese => "as",
            Language::English => "en",
        }
    }

    /// Unknown or empty codes yield English
    pub fn from_code(code: &str) -> Self {
        let code = code.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|l| l.code() == code)
            .unwrap_or_default()
    }

    pub fn native_name(&self) -> &'static str {
        match self {
            Language::Hindi => "हिंदी",
            Language::Bengali => "বাংলা",
            Language::Telugu => "తెలుగు",
            Language::Marathi => "मराठी",
            Language::Tamil => "தமிழ்",
            Language::Gujarati => "ગુજરાતી",
            Language::Kannada => "ಕನ್ನಡ",
            Language::Malayalam => "മലയാളം",
            Language::Punjabi => "ਪੰਜਾਬੀ",
            Language::Odia => "ଓଡ଼ିଆ",
            Language::Assamese => "অসমীয়া",
            Language::English => "English",
        }
    }

    pub fn english_name(&self) -> &'static str {
        match self {
            Language::Hindi => "Hindi",
            Language::Bengali => "Bengali",
            Language::Telugu => "Telugu",
            Language::Marathi => "Marathi",
            Language::Tamil => "Tamil",
            Language::Gujarati => "Gujarati",
            Language::Kannada => "Kannada",
            Language::Malayalam => "Malayalam",
            Language::Punjabi => "Punjabi",
            Language::Odia => "Odia",
            Language::Assamese => "Assamese",
            Language::English => "English",
        }
    }

    pub fn locale(&self) -> LanguageIdentifier {
        match self {
            Language::Hindi => langid!("hi-IN"),
            Language::Bengali => langid!("bn-IN"),
            Language::Telugu => langid!("te-IN"),
            Language::Marathi => langid!("mr-IN"),
            Language::Tamil => langid!("ta-IN"),
            Language::Gujarati => langid!("gu-IN"),
            Language::Kannada => langid!("kn-IN"),
            Language::Malayalam => langid!("ml-IN"),
            Language::Punjabi => langid!("pa-IN"),
            Language::Odia => langid!("or-IN"),
            Language::Assamese => langid!("as-IN"),
            Language::English => langid!("en-US"),
        }
    }

    /// Tag handed to speech recognition and synthesis
    pub fn speech_tag(&self) -> &'static str {
        match self {
            Language::Hindi => "hi-IN",
            _ => "en-US",
        }
    }

    /// Whether a translation table ships for this language. Others render English.
    pub fn has_translations(&self) -> bool {
        matches!(self, Language::Hindi | Language::English)
    }

    /// Picks one of two inline variants, for the few strings shown outside the Fluent tables
    pub fn pick<'a>(&self, english: &'a str, hindi: &'a str) -> &'a str {
        match self {
            Language::Hindi => hindi,
            _ => english,
        }
    }
}

/// Initialize i18n configuration with English as fallback language
pub fn init_i18n(language: Language) -> I18nConfig {
    I18nConfig::new(language.locale())
        .with_locale(Locale::new_static(langid!("en-US"), EN_US))
        .with_locale(Locale::new_static(langid!("hi-IN"), HI_IN))
        .with_fallback(langid!("en-US"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn keys(source: &str) -> BTreeSet<String> {
        source
            .lines()
            .filter(|l| !l.starts_with('#') && !l.starts_with(' ') && !l.starts_with('\t'))
            .filter_map(|l| l.split_once('='))
            .map(|(k, _)| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .collect()
    }

    #[test]
    fn test_codes_round_trip() {
        for language in Language::ALL {
            assert_eq!(Language::from_code(language.code()), language);
        }
        assert_eq!(Language::from_code(" HI "), Language::Hindi);
    }

    #[test]
    fn test_unknown_code_falls_back_to_english() {
        assert_eq!(Language::from_code(""), Language::English);
        assert_eq!(Language::from_code("fr"), Language::English);
    }

    #[test]
    fn test_speech_tags() {
        assert_eq!(Language::Hindi.speech_tag(), "hi-IN");
        assert_eq!(Language::Tamil.speech_tag(), "en-US");
        assert_eq!(Language::English.speech_tag(), "en-US");
    }

    #[test]
    fn test_hindi_keys_exist_in_english() {
        let en = keys(EN_US);
        let hi = keys(HI_IN);
        let missing: Vec<_> = hi.difference(&en).collect();
        assert!(missing.is_empty(), "keys only in hi-IN: {:?}", missing);
    }

    #[test]
    fn test_english_covers_hindi() {
        let en = keys(EN_US);
        let hi = keys(HI_IN);
        let untranslated: Vec<_> = en.difference(&hi).collect();
        assert!(
            untranslated.is_empty(),
            "keys missing from hi-IN: {:?}",
            untranslated
        );
    }

    #[test]
    fn test_message_keys_exist() {
        let en = keys(EN_US);
        for key in [
            "camera-permission-denied",
            "camera-unavailable",
            "camera-error",
            "error-generic",
            "error-incomplete-form",
            "error-image-unreadable",
        ] {
            assert!(en.contains(key), "missing key {}", key);
        }
    }
}
