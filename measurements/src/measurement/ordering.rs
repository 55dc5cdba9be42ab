use std::cmp::Ordering;

use ordered_float::OrderedFloat;

use crate::{DimensionLike, Error, Measurement, Result, UnitLike, unit::same_units};

impl<U: DimensionLike> Measurement<U> {
    /// Total order of two measurements of one family, NaN sorting above everything else.
    ///
    /// # Errors
    ///
    /// [`Error::IncompatibleDimensions`] when the other unit is not a dimension,
    /// or the units do not share a family.
    pub fn try_cmp<V: UnitLike>(&self, other: &Measurement<V>) -> Result<Ordering> {
        if same_units(&self.unit, &other.unit) {
            return Ok(OrderedFloat(self.value).cmp(&OrderedFloat(other.value)));
        }
        let (lhs, rhs) = self.base_values(other).ok_or_else(|| Error::IncompatibleDimensions {
            lhs: self.unit.symbol().to_owned(),
            rhs: other.unit.symbol().to_owned(),
        })?;
        Ok(OrderedFloat(lhs).cmp(&OrderedFloat(rhs)))
    }
}

/// IEEE 754 partial order: incomparable units and NaN values yield [`None`].
impl<U: DimensionLike, V: UnitLike> PartialOrd<Measurement<V>> for Measurement<U> {
    fn partial_cmp(&self, other: &Measurement<V>) -> Option<Ordering> {
        if same_units(&self.unit, &other.unit) {
            return self.value.partial_cmp(&other.value);
        }
        let (lhs, rhs) = self.base_values(other)?;
        lhs.partial_cmp(&rhs)
    }
}
