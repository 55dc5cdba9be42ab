use std::ops::{Add, Div, Mul, Sub};

use tracing::trace;

use crate::{DimensionLike, Error, Measurement, Operation, Result, unit::same_units};

/// Plain number a measurement may be offset or scaled by.
pub trait Scalar: Copy + private::Sealed {
    fn into_f64(self) -> f64;
}

mod private {
    pub trait Sealed {}

    impl Sealed for f64 {}
    impl Sealed for f32 {}
    impl Sealed for i16 {}
    impl Sealed for i32 {}
    impl Sealed for i64 {}
}

impl Scalar for f64 {
    fn into_f64(self) -> f64 {
        self
    }
}

impl Scalar for f32 {
    fn into_f64(self) -> f64 {
        f64::from(self)
    }
}

impl Scalar for i16 {
    fn into_f64(self) -> f64 {
        f64::from(self)
    }
}

impl Scalar for i32 {
    fn into_f64(self) -> f64 {
        f64::from(self)
    }
}

impl Scalar for i64 {
    #[expect(clippy::cast_precision_loss)]
    fn into_f64(self) -> f64 {
        self as f64
    }
}

macro_rules! scalar_operation {
    ($trait:ident, $method:ident, $operator:tt) => {
        impl<U, S: Scalar> $trait<S> for Measurement<U> {
            type Output = Self;

            fn $method(self, rhs: S) -> Self::Output {
                let (value, unit) = self.into_parts();
                Self::new(value $operator rhs.into_f64(), unit)
            }
        }
    };
}

scalar_operation!(Add, add, +);
scalar_operation!(Sub, sub, -);
scalar_operation!(Mul, mul, *);
scalar_operation!(Div, div, /);

impl<U: DimensionLike> Measurement<U> {
    /// # Errors
    ///
    /// [`Error::IncompatibleUnits`] when the units belong to different families.
    pub fn try_add(&self, other: &Self) -> Result<Self> {
        self.combine(other, Operation::Add, |lhs, rhs| lhs + rhs)
    }

    /// # Errors
    ///
    /// [`Error::IncompatibleUnits`] when the units belong to different families.
    pub fn try_sub(&self, other: &Self) -> Result<Self> {
        self.combine(other, Operation::Subtract, |lhs, rhs| lhs - rhs)
    }

    /// Multiply the values.
    ///
    /// No dimensional analysis happens: the product of two masses is still tagged as a mass.
    ///
    /// # Errors
    ///
    /// [`Error::IncompatibleUnits`] when the units belong to different families.
    pub fn try_mul(&self, other: &Self) -> Result<Self> {
        self.combine(other, Operation::Multiply, |lhs, rhs| lhs * rhs)
    }

    /// Divide the values, keeping the unit like [`Measurement::try_mul`] does.
    ///
    /// # Errors
    ///
    /// [`Error::IncompatibleUnits`] when the units belong to different families.
    pub fn try_div(&self, other: &Self) -> Result<Self> {
        self.combine(other, Operation::Divide, |lhs, rhs| lhs / rhs)
    }

    /// Combine raw values under the left unit when the units are equal,
    /// or base values under the base unit otherwise.
    fn combine(
        &self,
        other: &Self,
        operation: Operation,
        operator: impl Fn(f64, f64) -> f64,
    ) -> Result<Self> {
        let lhs = self.unit.dimension();
        let rhs = other.unit.dimension();
        if lhs.family() != rhs.family() {
            return Err(Error::IncompatibleUnits {
                operation,
                lhs: lhs.symbol().to_owned(),
                rhs: rhs.symbol().to_owned(),
            });
        }
        if same_units(&self.unit, &other.unit) {
            return Ok(Self::new(operator(self.value, other.value), self.unit.clone()));
        }
        let base_unit = self.unit.base_unit()?;
        trace!(%operation, lhs = lhs.symbol(), rhs = rhs.symbol(), "normalizing to the base unit");
        let value = operator(
            lhs.converter().base_value(self.value),
            rhs.converter().base_value(other.value),
        );
        Ok(Self::new(value, base_unit))
    }
}
