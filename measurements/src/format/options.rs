use bon::Builder;

use crate::format::{Locale, MeasureFormat};

#[derive(Copy, Clone, Builder)]
pub struct FormatOptions<'a> {
    #[builder(default = 2)]
    pub maximum_fraction_digits: u32,

    #[builder(default)]
    pub locale: Locale,

    /// Native phrases to try before falling back to `<value> <symbol>`.
    pub phrases: Option<&'a dyn MeasureFormat>,
}

impl Default for FormatOptions<'_> {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = FormatOptions::default();
        assert_eq!(options.maximum_fraction_digits, 2);
        assert_eq!(options.locale, Locale::EN_US);
        assert!(options.phrases.is_none());
    }
}
