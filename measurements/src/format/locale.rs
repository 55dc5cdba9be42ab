use std::str::FromStr;

use crate::{Error, Result};

/// Number separators of a language and region.
#[derive(Copy, Clone, Debug, Eq, PartialEq, derive_more::Display)]
#[display("{tag}")]
pub struct Locale {
    tag: &'static str,
    decimal_separator: char,
    grouping_separator: char,
}

impl Locale {
    pub const EN_US: Self = Self::new("en-US", '.', ',');
    pub const NL_NL: Self = Self::new("nl-NL", ',', '.');
    pub const DE_DE: Self = Self::new("de-DE", ',', '.');
    pub const FR_FR: Self = Self::new("fr-FR", ',', '\u{202f}');

    pub const ALL: [Self; 4] = [Self::EN_US, Self::NL_NL, Self::DE_DE, Self::FR_FR];

    const fn new(tag: &'static str, decimal_separator: char, grouping_separator: char) -> Self {
        Self { tag, decimal_separator, grouping_separator }
    }

    /// Find the locale by its language tag, ignoring case. Underscores work as well as hyphens.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownLocale`] when the locale is not predefined.
    pub fn from_tag(tag: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|locale| locale.tag.eq_ignore_ascii_case(&tag.replace('_', "-")))
            .ok_or_else(|| Error::UnknownLocale(tag.to_owned()))
    }

    #[must_use]
    pub const fn tag(self) -> &'static str {
        self.tag
    }

    #[must_use]
    pub const fn decimal_separator(self) -> char {
        self.decimal_separator
    }

    #[must_use]
    pub const fn grouping_separator(self) -> char {
        self.grouping_separator
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::EN_US
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(tag: &str) -> Result<Self> {
        Self::from_tag(tag)
    }
}
