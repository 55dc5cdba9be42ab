use std::{borrow::Cow, fmt::Debug};

use serde::{Deserialize, Serialize};

use crate::Dimension;

/// Anything that may label a [`crate::Measurement`].
pub trait UnitLike: Clone + Debug {
    fn symbol(&self) -> &str;

    /// Conversion-capable view of the unit, if it has one.
    fn as_dimension(&self) -> Option<&Dimension>;

    /// Equality as seen from `self`.
    ///
    /// This is intentionally not symmetric: a plain [`Unit`] equals anything with the same symbol,
    /// while a [`Dimension`] additionally demands a dimension with the same converter and format
    /// tag on the other side. A family member also demands the same family, a family-less
    /// dimension does not.
    fn eq_unit<V: UnitLike>(&self, other: &V) -> bool;
}

/// Plain unit: nothing but a symbol.
#[derive(
    Clone,
    Debug,
    Deserialize,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
    derive_more::Display,
)]
#[display("{symbol}")]
pub struct Unit {
    symbol: Cow<'static, str>,
}

impl Unit {
    pub fn new(symbol: impl Into<Cow<'static, str>>) -> Self {
        Self { symbol: symbol.into() }
    }

    pub const fn from_static(symbol: &'static str) -> Self {
        Self { symbol: Cow::Borrowed(symbol) }
    }

    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }
}

impl UnitLike for Unit {
    fn symbol(&self) -> &str {
        &self.symbol
    }

    fn as_dimension(&self) -> Option<&Dimension> {
        None
    }

    fn eq_unit<V: UnitLike>(&self, other: &V) -> bool {
        self.symbol() == other.symbol()
    }
}

/// Symmetric value equality of two units, the one measurements rely on.
///
/// Two dimensions must agree on every field, two plain units on the symbol. A plain unit never
/// equals a dimension here.
pub(crate) fn same_units<L: UnitLike, R: UnitLike>(lhs: &L, rhs: &R) -> bool {
    match (lhs.as_dimension(), rhs.as_dimension()) {
        (Some(lhs), Some(rhs)) => lhs == rhs,
        (None, None) => lhs.symbol() == rhs.symbol(),
        _ => false,
    }
}
