//! Human-readable rendering of measurements.

mod locale;
mod long_names;
mod number;
mod options;

pub use self::{
    locale::Locale,
    long_names::LongNames,
    number::format_number,
    options::FormatOptions,
};
use crate::{Dimension, FormatTag, Measurement, UnitLike};

/// Source of native phrases for tagged units, such as `2 kilograms`.
pub trait MeasureFormat {
    /// Render the value with the phrase for the tag, or [`None`] if there is no such phrase.
    fn format(&self, value: f64, tag: &FormatTag, options: &FormatOptions<'_>) -> Option<String>;
}

impl<U: UnitLike> Measurement<U> {
    /// Render with the default options: at most two fraction digits, `en-US`, no phrases.
    #[must_use]
    pub fn format(&self) -> String {
        self.format_with(&FormatOptions::default())
    }

    /// Render with a native phrase when one is available, or as `<rounded value> <symbol>`.
    #[must_use]
    pub fn format_with(&self, options: &FormatOptions<'_>) -> String {
        if let Some(phrases) = options.phrases
            && let Some(tag) = self.unit().as_dimension().and_then(Dimension::format_tag)
            && let Some(phrase) = phrases.format(self.value(), tag, options)
        {
            return phrase;
        }
        let value = format_number(
            self.value(),
            options.maximum_fraction_digits,
            options.locale,
            false,
        );
        format!("{value} {}", self.unit().symbol())
    }
}
