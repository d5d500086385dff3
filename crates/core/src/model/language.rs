use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Languages the app ships content for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// German is the primary audience, so it stays the default.
    #[default]
    De,
    En,
    Es,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::De, Language::En, Language::Es];

    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Language::De => "de",
            Language::En => "en",
            Language::Es => "es",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error type for parsing a language code from a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLanguageError {
    raw: String,
}

impl fmt::Display for ParseLanguageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported language code: {}", self.raw)
    }
}

impl std::error::Error for ParseLanguageError {}

impl FromStr for Language {
    type Err = ParseLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "de" => Ok(Language::De),
            "en" => Ok(Language::En),
            "es" => Ok(Language::Es),
            other => Err(ParseLanguageError {
                raw: other.to_string(),
            }),
        }
    }
}

/// One value per supported language.
///
/// The catalogs in `content` are `const` tables, so the fields hold
/// `&'static str` (or arrays of them) and stay public for literal
/// construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Localized<T> {
    pub de: T,
    pub en: T,
    pub es: T,
}

impl<T> Localized<T> {
    #[must_use]
    pub fn get(&self, language: Language) -> &T {
        match language {
            Language::De => &self.de,
            Language::En => &self.en,
            Language::Es => &self.es,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_code_roundtrip() {
        for language in Language::ALL {
            let parsed: Language = language.code().parse().unwrap();
            assert_eq!(parsed, language);
        }
    }

    #[test]
    fn language_from_str_rejects_unknown() {
        assert!("fr".parse::<Language>().is_err());
        assert!("".parse::<Language>().is_err());
    }

    #[test]
    fn localized_get_picks_the_right_variant() {
        let text = Localized {
            de: "Hallo",
            en: "Hello",
            es: "Hola",
        };
        assert_eq!(*text.get(Language::De), "Hallo");
        assert_eq!(*text.get(Language::En), "Hello");
        assert_eq!(*text.get(Language::Es), "Hola");
    }
}
