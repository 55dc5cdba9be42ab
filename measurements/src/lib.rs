#![allow(clippy::doc_markdown)]
#![doc = include_str!("../../README.md")]

pub mod catalog;
mod converter;
mod dimension;
mod error;
mod family;
pub mod format;
mod measurement;
mod unit;

pub use self::{
    converter::UnitConverter,
    dimension::{Dimension, DimensionLike, FormatTag},
    error::{Error, Operation, Result},
    family::Family,
    format::{FormatOptions, Locale, LongNames, MeasureFormat},
    measurement::{Measurement, Scalar},
    unit::{Unit, UnitLike},
};

#[cfg(test)]
mod tests {
    use super::*;

    const fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn public_types_are_send_and_sync() {
        assert_send_sync::<Unit>();
        assert_send_sync::<Dimension>();
        assert_send_sync::<UnitConverter>();
        assert_send_sync::<Measurement<Dimension>>();
        assert_send_sync::<Measurement<Unit>>();
        assert_send_sync::<Error>();
    }
}
