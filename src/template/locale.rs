// ABOUTME: Locale definitions for the localize and date template filters
// ABOUTME: Maps locale tags to number separators and chrono date patterns

use chrono::Locale;

use super::error::{Result, TemplateError};

/// Locales supported by the locale-aware filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TexLocale {
    #[default]
    English,
    German,
    French,
}

impl TexLocale {
    /// Parse a locale tag like "en", "de_DE" or "fr-FR"
    pub fn from_tag(tag: &str) -> Result<Self> {
        let language = tag
            .split(['_', '-'])
            .next()
            .unwrap_or(tag)
            .to_ascii_lowercase();

        match language.as_str() {
            "en" => Ok(Self::English),
            "de" => Ok(Self::German),
            "fr" => Ok(Self::French),
            _ => Err(TemplateError::UnknownLocale(tag.to_string())),
        }
    }

    /// Decimal separator used when formatting numbers
    pub fn decimal_separator(self) -> char {
        match self {
            Self::English => '.',
            Self::German => ',',
            Self::French => ',',
        }
    }

    /// Thousands separator used when grouping is requested
    pub fn group_separator(self) -> &'static str {
        match self {
            Self::English => ",",
            Self::German => ".",
            // Narrow no-break space, as French typography wants
            Self::French => "\u{202f}",
        }
    }

    /// Short date pattern used by the localize filter
    pub fn short_date_format(self) -> &'static str {
        match self {
            Self::English => "%m/%d/%Y",
            Self::German => "%d.%m.%Y",
            Self::French => "%d/%m/%Y",
        }
    }

    /// Long date pattern used by the date filter when no format is given
    pub fn long_date_format(self) -> &'static str {
        match self {
            Self::English => "%B %-d, %Y",
            Self::German => "%-d. %B %Y",
            Self::French => "%-d %B %Y",
        }
    }

    /// The chrono locale driving month and day names
    pub fn chrono_locale(self) -> Locale {
        match self {
            Self::English => Locale::en_US,
            Self::German => Locale::de_DE,
            Self::French => Locale::fr_FR,
        }
    }
}
