mod arithmetic;
mod ordering;
mod sum;

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use tracing::trace;

pub use self::arithmetic::Scalar;
use crate::{DimensionLike, Error, Operation, Result, UnitLike, unit::same_units};

/// Value paired with the unit it is expressed in.
///
/// All operations return new measurements, except [`Measurement::convert`], which rewrites the
/// receiver in place.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[must_use]
pub struct Measurement<U> {
    value: f64,
    unit: U,
}

impl<U> Measurement<U> {
    pub const fn new(value: f64, unit: U) -> Self {
        Self { value, unit }
    }

    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    #[must_use]
    pub const fn unit(&self) -> &U {
        &self.unit
    }

    #[must_use]
    pub fn into_parts(self) -> (f64, U) {
        (self.value, self.unit)
    }
}

impl<U: UnitLike> Measurement<U> {
    /// Plain `<value> <symbol>` rendering, for example `1.0 g`.
    #[must_use]
    pub fn description(&self) -> String {
        format!("{:?} {}", self.value, self.unit.symbol())
    }

    /// Directional equality built on [`UnitLike::eq_unit`].
    ///
    /// Unlike `==`, a plain unit measurement equals a dimension measurement with the same symbol
    /// and value, while the reverse does not hold.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn eq_measurement<V: UnitLike>(&self, other: &Measurement<V>) -> bool {
        if self.unit.eq_unit(&other.unit) {
            return self.value == other.value;
        }
        self.base_values(other).is_some_and(|(lhs, rhs)| lhs == rhs)
    }

    /// Both values in terms of their common base unit, if the units share a family.
    fn base_values<V: UnitLike>(&self, other: &Measurement<V>) -> Option<(f64, f64)> {
        let lhs = self.unit.as_dimension()?;
        let rhs = other.unit.as_dimension()?;
        let family = lhs.family()?;
        (rhs.family() == Some(family)).then(|| {
            (
                lhs.converter().base_value(self.value),
                rhs.converter().base_value(other.value),
            )
        })
    }
}

impl<U: DimensionLike> Measurement<U> {
    /// Express the measurement in another unit of the same family.
    ///
    /// A family-less source converts into any family member through the target's base unit.
    ///
    /// # Errors
    ///
    /// - [`Error::IncompatibleUnits`] when both units belong to families, and these differ.
    /// - [`Error::UnsupportedOperation`] when the target has no family, and hence no base unit.
    pub fn converted(&self, target: &U) -> Result<Self> {
        if same_units(&self.unit, target) {
            return Ok(Self::new(self.value, target.clone()));
        }
        let source = self.unit.dimension();
        let dimension = target.dimension();
        let families = (source.family(), dimension.family());
        if matches!(families, (Some(lhs), Some(rhs)) if lhs != rhs) {
            return Err(Error::IncompatibleUnits {
                operation: Operation::Convert,
                lhs: source.symbol().to_owned(),
                rhs: dimension.symbol().to_owned(),
            });
        }
        let base_value = source.converter().base_value(self.value);
        let value = if target.base_unit()?.dimension() == dimension {
            base_value
        } else {
            dimension.converter().value(base_value)
        };
        trace!(from = source.symbol(), to = dimension.symbol(), value, "converted");
        Ok(Self::new(value, target.clone()))
    }

    /// Convert the measurement in place, leaving it untouched on error.
    ///
    /// # Errors
    ///
    /// See [`Measurement::converted`].
    pub fn convert(&mut self, target: &U) -> Result {
        *self = self.converted(target)?;
        Ok(())
    }
}

impl<U: UnitLike> Display for Measurement<U> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            r#""measurement": {{ "value": "{:?}", "symbol": "{}" }}"#,
            self.value,
            self.unit.symbol(),
        )
    }
}

/// Equal units compare raw values, units of one family compare base values,
/// anything else is unequal.
///
/// Unit equality here is symmetric: a plain unit never equals a dimension, even with the same
/// symbol. Use [`Measurement::eq_measurement`] for the directional, symbol-only comparison.
impl<U: UnitLike, V: UnitLike> PartialEq<Measurement<V>> for Measurement<U> {
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &Measurement<V>) -> bool {
        if std::ptr::addr_eq(self, other) {
            return true;
        }
        if same_units(&self.unit, &other.unit) {
            return self.value == other.value;
        }
        self.base_values(other).is_some_and(|(lhs, rhs)| lhs == rhs)
    }
}
