use tracing::{debug, instrument};

use crate::{DimensionLike, Error, Measurement, Operation, Result, unit::same_units};

impl<U: DimensionLike> Measurement<U> {
    /// Total of the measurements.
    ///
    /// When all units are equal, the result keeps that unit. Otherwise, every value is
    /// normalized and the total is expressed in the base unit.
    ///
    /// # Errors
    ///
    /// [`Error::IncompatibleUnits`] when any unit belongs to a different family than the first one.
    #[instrument(level = "trace", skip_all)]
    pub fn sum(measurements: impl IntoIterator<Item = Self>) -> Result<Option<Self>> {
        let mut measurements = measurements.into_iter();
        let Some(first) = measurements.next() else {
            return Ok(None);
        };
        let dimension = first.unit.dimension();
        let mut total = first.value;
        let mut base_total = dimension.converter().base_value(first.value);
        let mut is_uniform = true;
        let mut n_measurements = 1_usize;

        for measurement in measurements {
            let other = measurement.unit.dimension();
            if other.family() != dimension.family() {
                return Err(Error::IncompatibleUnits {
                    operation: Operation::Sum,
                    lhs: dimension.symbol().to_owned(),
                    rhs: other.symbol().to_owned(),
                });
            }
            is_uniform &= same_units(&first.unit, &measurement.unit);
            total += measurement.value;
            base_total += other.converter().base_value(measurement.value);
            n_measurements += 1;
        }

        if is_uniform {
            return Ok(Some(Self::new(total, first.unit)));
        }
        let base_unit = first.unit.base_unit()?;
        debug!(n_measurements, base_unit = base_unit.symbol(), "summed mixed units");
        Ok(Some(Self::new(base_total, base_unit)))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::{
        Dimension,
        catalog::{UnitLength, UnitMass},
    };

    #[test]
    fn empty() {
        assert!(Measurement::<Dimension>::sum([]).unwrap().is_none());
    }

    #[test]
    fn uniform_units() {
        let total = Measurement::sum([
            Measurement::new(1.0, UnitMass::GRAMS),
            Measurement::new(2.0, UnitMass::GRAMS),
        ])
        .unwrap()
        .unwrap();
        assert_eq!(total, Measurement::new(3.0, UnitMass::GRAMS));
        assert_eq!(total.unit(), &UnitMass::GRAMS);
    }

    #[test]
    fn single() {
        let total = Measurement::sum([Measurement::new(5.0, UnitLength::FEET)]).unwrap().unwrap();
        assert_eq!(total.value(), 5.0);
        assert_eq!(total.unit().symbol(), "ft");
    }

    #[test]
    fn mixed_units() {
        let total = Measurement::sum([
            Measurement::new(1.0, UnitMass::KILOGRAMS),
            Measurement::new(500.0, UnitMass::GRAMS),
            Measurement::new(2.0, UnitMass::POUNDS),
        ])
        .unwrap()
        .unwrap();
        assert_abs_diff_eq!(total.value(), 2.407_184, epsilon = 1e-9);
        assert_eq!(total.unit(), &UnitMass::KILOGRAMS);
    }

    #[test]
    fn mixed_families() {
        let error = Measurement::sum([
            Measurement::new(1.0, UnitMass::GRAMS),
            Measurement::new(2.0, UnitMass::GRAMS),
            Measurement::new(3.0, UnitLength::METERS),
        ])
        .unwrap_err();
        assert_eq!(
            error.to_string(),
            "attempt to sum measurements with non-equal units: g and m",
        );
    }
}
