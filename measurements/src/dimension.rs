use std::{
    borrow::Cow,
    hash::{Hash, Hasher},
};

use serde::{Deserialize, Serialize};

use crate::{Error, Family, Result, Unit, UnitConverter, UnitLike};

/// Unit that knows how to convert to and from the base unit of its family.
pub trait DimensionLike: UnitLike {
    fn dimension(&self) -> &Dimension;

    /// Canonical unit of the family, the one all conversions route through.
    ///
    /// # Errors
    ///
    /// [`Error::UnsupportedOperation`] when the unit does not belong to a family.
    fn base_unit(&self) -> Result<Self>;
}

/// Opaque identifier the display formatter may use to pick a native phrase for the unit.
#[derive(
    Clone,
    Debug,
    Deserialize,
    Eq,
    Hash,
    PartialEq,
    Serialize,
    derive_more::Display,
)]
#[serde(transparent)]
pub struct FormatTag(Cow<'static, str>);

impl FormatTag {
    pub const fn from_static(tag: &'static str) -> Self {
        Self(Cow::Borrowed(tag))
    }

    pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
        Self(tag.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Unit with a conversion rule.
///
/// Dimensions of the built-in catalog carry a [`Family`], which resolves their base unit.
/// A dimension created with [`Dimension::new`] has none, and asking it for a base unit fails.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Dimension {
    #[serde(flatten)]
    unit: Unit,

    converter: UnitConverter,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    format_tag: Option<FormatTag>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    family: Option<Family>,
}

impl Dimension {
    /// Create a family-less dimension.
    pub fn new(symbol: impl Into<Cow<'static, str>>, converter: UnitConverter) -> Self {
        Self { unit: Unit::new(symbol), converter, format_tag: None, family: None }
    }

    /// Create a member of the family.
    pub fn in_family(
        symbol: impl Into<Cow<'static, str>>,
        converter: UnitConverter,
        family: Family,
    ) -> Self {
        Self { unit: Unit::new(symbol), converter, format_tag: None, family: Some(family) }
    }

    pub(crate) const fn from_parts(
        symbol: &'static str,
        converter: UnitConverter,
        format_tag: Option<FormatTag>,
        family: Option<Family>,
    ) -> Self {
        Self { unit: Unit::from_static(symbol), converter, format_tag, family }
    }

    #[must_use]
    pub fn with_format_tag(mut self, format_tag: FormatTag) -> Self {
        self.format_tag = Some(format_tag);
        self
    }

    #[must_use]
    pub fn symbol(&self) -> &str {
        self.unit.symbol()
    }

    /// The dimension seen as a plain unit, which compares by symbol only.
    #[must_use]
    pub const fn as_unit(&self) -> &Unit {
        &self.unit
    }

    #[must_use]
    pub const fn converter(&self) -> UnitConverter {
        self.converter
    }

    #[must_use]
    pub const fn format_tag(&self) -> Option<&FormatTag> {
        self.format_tag.as_ref()
    }

    #[must_use]
    pub const fn family(&self) -> Option<Family> {
        self.family
    }

    /// # Errors
    ///
    /// [`Error::UnsupportedOperation`] when the dimension does not belong to a family.
    pub fn base_unit(&self) -> Result<Self> {
        self.family
            .map(Family::base_unit)
            .ok_or_else(|| Error::UnsupportedOperation { symbol: self.symbol().to_owned() })
    }

    /// Whether this is the base unit of its family.
    #[must_use]
    pub fn is_base_unit(&self) -> bool {
        self.family.is_some_and(|family| *self == family.base_unit())
    }
}

impl PartialEq for Dimension {
    fn eq(&self, other: &Self) -> bool {
        self.unit == other.unit
            && self.converter == other.converter
            && self.format_tag == other.format_tag
            && self.family == other.family
    }
}

impl Eq for Dimension {}

impl Hash for Dimension {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.unit.hash(state);
        self.converter.hash(state);
        self.format_tag.hash(state);
        self.family.hash(state);
    }
}

impl UnitLike for Dimension {
    fn symbol(&self) -> &str {
        self.unit.symbol()
    }

    fn as_dimension(&self) -> Option<&Dimension> {
        Some(self)
    }

    fn eq_unit<V: UnitLike>(&self, other: &V) -> bool {
        other.as_dimension().is_some_and(|other| {
            self.unit == other.unit
                && self.converter == other.converter
                && self.format_tag == other.format_tag
                && self.family.is_none_or(|family| other.family == Some(family))
        })
    }
}

impl DimensionLike for Dimension {
    fn dimension(&self) -> &Dimension {
        self
    }

    fn base_unit(&self) -> Result<Self> {
        Self::base_unit(self)
    }
}

#[cfg(test)]
mod tests {
    use std::hash::{BuildHasher, RandomState};

    use super::*;
    use crate::catalog::{UnitFuelEfficiency, UnitLength, UnitMass};

    fn converters() -> (UnitConverter, UnitConverter) {
        (
            UnitConverter::linear_with_constant(1.0, 2.0),
            UnitConverter::linear_with_constant(1.0, 3.0),
        )
    }

    #[test]
    fn equality() {
        let (uc1, uc2) = converters();
        let d1 = Dimension::new("a", uc1);
        let d2 = Dimension::new("a", uc1);
        let d3 = Dimension::new("ab", uc1);
        let d4 = Dimension::new("a", uc2);

        assert_eq!(d1, d2);
        assert_eq!(d2, d1);
        assert_ne!(d1, d3);
        assert_ne!(d3, d1);
        assert_ne!(d1, d4);
        assert_ne!(d4, d1);

        let state = RandomState::new();
        assert_eq!(state.hash_one(&d1), state.hash_one(&d2));
    }

    #[test]
    fn format_tag_takes_part_in_equality() {
        let (uc1, _) = converters();
        let plain = Dimension::new("a", uc1);
        let tagged = Dimension::new("a", uc1).with_format_tag(FormatTag::from_static("mass-a"));
        assert_ne!(plain, tagged);
        assert!(!plain.eq_unit(&tagged));
    }

    #[test]
    fn asymmetric_equality_with_unit() {
        let (uc1, _) = converters();
        let unit = Unit::new("a");
        let dimension = Dimension::new("a", uc1);
        assert!(unit.eq_unit(&dimension));
        assert!(!dimension.eq_unit(&unit));
    }

    /// A family-less dimension accepts a family member, a family member rejects a stranger.
    #[test]
    fn asymmetric_equality_with_family_member() {
        let (uc1, uc2) = converters();
        let d1 = Dimension::new("a", uc1);
        let m1 = UnitMass::new("a", uc1);
        let m2 = UnitMass::new("a", uc1);
        let m3 = UnitMass::new("ab", uc1);
        let m4 = UnitMass::new("a", uc2);

        assert!(m1.eq_unit(&m2));
        assert!(m2.eq_unit(&m1));
        assert!(!m1.eq_unit(&m3));
        assert!(!m1.eq_unit(&m4));

        assert!(d1.eq_unit(&m1));
        assert!(!m1.eq_unit(&d1));
        assert!(Unit::new("a").eq_unit(&m1));
        assert!(!m1.eq_unit(&Unit::new("a")));

        let f1 = UnitFuelEfficiency::new("a", uc1);
        assert!(!m1.eq_unit(&f1));
        assert!(!f1.eq_unit(&m1));
    }

    #[test]
    fn family_less_base_unit_is_unsupported() {
        let (uc1, _) = converters();
        let error = Dimension::new("a", uc1).base_unit().unwrap_err();
        assert_eq!(error, Error::UnsupportedOperation { symbol: "a".to_owned() });
    }

    #[test]
    fn base_unit() {
        assert_eq!(UnitMass::POUNDS.base_unit().unwrap().symbol(), UnitMass::KILOGRAMS.symbol());
        assert_eq!(UnitLength::ASTRONOMICAL_UNITS.base_unit().unwrap(), UnitLength::METERS);
        assert!(UnitLength::METERS.is_base_unit());
        assert!(!UnitLength::FEET.is_base_unit());
        assert!(!Dimension::new("m", UnitConverter::IDENTITY).is_base_unit());
    }

    #[test]
    fn serde() {
        let json = serde_json::to_value(&UnitMass::KILOGRAMS).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "symbol": "kg",
                "converter": { "kind": "linear", "coefficient": 1.0, "constant": 0.0 },
                "format_tag": "mass-kilogram",
                "family": "mass",
            }),
        );
        let dimension: Dimension = serde_json::from_value(json).unwrap();
        assert_eq!(dimension, UnitMass::KILOGRAMS);
    }
}
