use std::hash::{Hash, Hasher};

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// Translates a value between a unit's own scale and the base unit of its family.
///
/// Both directions are total over `f64`: degenerate inputs, such as zero for a reciprocal
/// converter, produce infinities or NaN as IEEE 754 prescribes instead of failing.
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum UnitConverter {
    /// `base = value × coefficient + constant`.
    Linear { coefficient: f64, constant: f64 },

    /// `base = reciprocal ÷ value`, for inverse relationships such as miles per gallon
    /// versus liters per 100 kilometers.
    Reciprocal { reciprocal: f64 },
}

impl UnitConverter {
    /// Converter of a base unit.
    pub const IDENTITY: Self = Self::linear(1.0);

    #[must_use]
    pub const fn linear(coefficient: f64) -> Self {
        Self::Linear { coefficient, constant: 0.0 }
    }

    #[must_use]
    pub const fn linear_with_constant(coefficient: f64, constant: f64) -> Self {
        Self::Linear { coefficient, constant }
    }

    #[must_use]
    pub const fn reciprocal(reciprocal: f64) -> Self {
        Self::Reciprocal { reciprocal }
    }

    /// Express the value, given in the converter's own unit, in terms of the base unit.
    #[must_use]
    #[allow(clippy::suboptimal_flops)]
    pub fn base_value(self, value: f64) -> f64 {
        match self {
            Self::Linear { coefficient, constant } => value * coefficient + constant,
            Self::Reciprocal { reciprocal } => reciprocal / value,
        }
    }

    /// Express the base unit value in terms of the converter's own unit.
    #[must_use]
    pub fn value(self, base_value: f64) -> f64 {
        match self {
            Self::Linear { coefficient, constant } => (base_value - constant) / coefficient,
            Self::Reciprocal { reciprocal } => reciprocal / base_value,
        }
    }

    fn key(self) -> (u8, OrderedFloat<f64>, OrderedFloat<f64>) {
        match self {
            Self::Linear { coefficient, constant } => {
                (0, OrderedFloat(coefficient), OrderedFloat(constant))
            }
            Self::Reciprocal { reciprocal } => (1, OrderedFloat(reciprocal), OrderedFloat(0.0)),
        }
    }
}

impl PartialEq for UnitConverter {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for UnitConverter {}

impl Hash for UnitConverter {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use std::hash::{BuildHasher, RandomState};

    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn linear_round_trip() {
        let converter = UnitConverter::linear_with_constant(1.0, 273.15);
        assert_abs_diff_eq!(converter.base_value(20.0), 293.15, epsilon = 1e-9);
        assert_abs_diff_eq!(converter.value(293.15), 20.0, epsilon = 1e-9);
        assert_abs_diff_eq!(converter.value(converter.base_value(1.0)), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn reciprocal_round_trip() {
        let reciprocal = 282.481;
        let converter = UnitConverter::reciprocal(reciprocal);
        assert_abs_diff_eq!(converter.value(reciprocal), 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(converter.base_value(1.0), reciprocal, epsilon = 1e-9);
    }

    /// Zero is not an error for a reciprocal converter, it propagates as infinity.
    #[test]
    fn reciprocal_of_zero() {
        let converter = UnitConverter::reciprocal(235.215);
        assert_eq!(converter.base_value(0.0), f64::INFINITY);
        assert_eq!(converter.value(0.0), f64::INFINITY);
        assert_eq!(converter.value(-0.0), f64::NEG_INFINITY);
    }

    #[test]
    fn nan_propagates() {
        assert!(UnitConverter::linear(0.001).base_value(f64::NAN).is_nan());
        assert!(UnitConverter::reciprocal(1.0).value(f64::NAN).is_nan());
    }

    #[test]
    fn equality() {
        assert_eq!(UnitConverter::reciprocal(1.0), UnitConverter::reciprocal(1.0));
        assert_ne!(UnitConverter::reciprocal(1.0), UnitConverter::reciprocal(2.0));
        assert_eq!(
            UnitConverter::linear_with_constant(1.0, 2.0),
            UnitConverter::linear_with_constant(1.0, 2.0),
        );
        assert_ne!(
            UnitConverter::linear_with_constant(1.0, 2.0),
            UnitConverter::linear_with_constant(1.0, 3.0),
        );
        assert_ne!(UnitConverter::linear(1.0), UnitConverter::reciprocal(1.0));
        assert_eq!(UnitConverter::IDENTITY, UnitConverter::linear(1.0));
    }

    #[test]
    fn equal_converters_hash_equally() {
        let state = RandomState::new();
        assert_eq!(
            state.hash_one(UnitConverter::reciprocal(1.0)),
            state.hash_one(UnitConverter::reciprocal(1.0)),
        );
        assert_eq!(
            state.hash_one(UnitConverter::linear(0.001)),
            state.hash_one(UnitConverter::linear_with_constant(0.001, 0.0)),
        );
    }

    #[test]
    fn serde() {
        let json = serde_json::to_string(&UnitConverter::reciprocal(235.215)).unwrap();
        assert_eq!(json, r#"{"kind":"reciprocal","reciprocal":235.215}"#);
        let converter: UnitConverter =
            serde_json::from_str(r#"{"kind":"linear","coefficient":0.001,"constant":0.0}"#)
                .unwrap();
        assert_eq!(converter, UnitConverter::linear(0.001));
    }
}
