//! Locale type for the two languages the site serves.
//!
//! Every localized gateway read takes a `Locale`; the CMS returns the
//! matching translated fields. Arabic pages render right-to-left, which
//! the UI layer decides via [`Locale::is_rtl`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// A supported content locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    Ar,
}

impl Locale {
    /// The locale code as the CMS expects it in query parameters.
    pub fn as_str(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ar => "ar",
        }
    }

    /// Parse a locale code, accepting region-tagged forms like `ar-AE`
    /// or `en-GB`. Returns `None` for anything outside the supported set.
    pub fn from_code(code: &str) -> Option<Self> {
        let primary = code
            .split(['-', '_'])
            .next()
            .unwrap_or(code)
            .to_ascii_lowercase();

        match primary.as_str() {
            "en" => Some(Locale::En),
            "ar" => Some(Locale::Ar),
            _ => None,
        }
    }

    /// Whether text in this locale runs right-to-left.
    pub fn is_rtl(self) -> bool {
        matches!(self, Locale::Ar)
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::En
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str() {
        assert_eq!(Locale::En.as_str(), "en");
        assert_eq!(Locale::Ar.as_str(), "ar");
    }

    #[test]
    fn test_from_code_plain() {
        assert_eq!(Locale::from_code("en"), Some(Locale::En));
        assert_eq!(Locale::from_code("ar"), Some(Locale::Ar));
    }

    #[test]
    fn test_from_code_region_tagged() {
        assert_eq!(Locale::from_code("ar-AE"), Some(Locale::Ar));
        assert_eq!(Locale::from_code("ar_SA"), Some(Locale::Ar));
        assert_eq!(Locale::from_code("en-GB"), Some(Locale::En));
        assert_eq!(Locale::from_code("EN"), Some(Locale::En));
    }

    #[test]
    fn test_from_code_unsupported() {
        assert_eq!(Locale::from_code("fr"), None);
        assert_eq!(Locale::from_code(""), None);
    }

    #[test]
    fn test_rtl() {
        assert!(Locale::Ar.is_rtl());
        assert!(!Locale::En.is_rtl());
    }

    #[test]
    fn test_default_is_english() {
        assert_eq!(Locale::default(), Locale::En);
    }

    #[test]
    fn test_serde_roundtrip() {
        let json = serde_json::to_string(&Locale::Ar).expect("serialize");
        assert_eq!(json, "\"ar\"");

        let parsed: Locale = serde_json::from_str("\"en\"").expect("deserialize");
        assert_eq!(parsed, Locale::En);
    }

    #[test]
    fn test_display() {
        assert_eq!(Locale::Ar.to_string(), "ar");
        assert_eq!(format!("locale={}", Locale::En), "locale=en");
    }
}
