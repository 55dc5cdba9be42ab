use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{
    Dimension,
    Error,
    catalog::{
        UnitAngle,
        UnitArea,
        UnitDuration,
        UnitElectricCurrent,
        UnitElectricPotentialDifference,
        UnitElectricResistance,
        UnitFrequency,
        UnitFuelEfficiency,
        UnitInformationStorage,
        UnitLength,
        UnitMass,
        UnitPower,
        UnitPressure,
        UnitTemperature,
        UnitVolume,
    },
};

/// Physical quantity a [`Dimension`] measures.
///
/// Measurements combine and compare only within one family, and every family has exactly one
/// base unit all of its conversions route through.
#[derive(
    Copy,
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
#[serde(rename_all = "kebab-case")]
pub enum Family {
    #[display("angle")]
    Angle,

    #[display("area")]
    Area,

    #[display("duration")]
    Duration,

    #[display("electric-current")]
    ElectricCurrent,

    #[display("electric-potential-difference")]
    ElectricPotentialDifference,

    #[display("electric-resistance")]
    ElectricResistance,

    #[display("frequency")]
    Frequency,

    #[display("fuel-efficiency")]
    FuelEfficiency,

    #[display("information-storage")]
    InformationStorage,

    #[display("length")]
    Length,

    #[display("mass")]
    Mass,

    #[display("power")]
    Power,

    #[display("pressure")]
    Pressure,

    #[display("temperature")]
    Temperature,

    #[display("volume")]
    Volume,
}

impl Family {
    pub const ALL: [Self; 15] = [
        Self::Angle,
        Self::Area,
        Self::Duration,
        Self::ElectricCurrent,
        Self::ElectricPotentialDifference,
        Self::ElectricResistance,
        Self::Frequency,
        Self::FuelEfficiency,
        Self::InformationStorage,
        Self::Length,
        Self::Mass,
        Self::Power,
        Self::Pressure,
        Self::Temperature,
        Self::Volume,
    ];

    #[must_use]
    pub const fn base_unit(self) -> Dimension {
        match self {
            Self::Angle => UnitAngle::BASE,
            Self::Area => UnitArea::BASE,
            Self::Duration => UnitDuration::BASE,
            Self::ElectricCurrent => UnitElectricCurrent::BASE,
            Self::ElectricPotentialDifference => UnitElectricPotentialDifference::BASE,
            Self::ElectricResistance => UnitElectricResistance::BASE,
            Self::Frequency => UnitFrequency::BASE,
            Self::FuelEfficiency => UnitFuelEfficiency::BASE,
            Self::InformationStorage => UnitInformationStorage::BASE,
            Self::Length => UnitLength::BASE,
            Self::Mass => UnitMass::BASE,
            Self::Power => UnitPower::BASE,
            Self::Pressure => UnitPressure::BASE,
            Self::Temperature => UnitTemperature::BASE,
            Self::Volume => UnitVolume::BASE,
        }
    }

    /// Catalog of the family, in declaration order.
    #[must_use]
    pub const fn units(self) -> &'static [Dimension] {
        match self {
            Self::Angle => UnitAngle::ALL,
            Self::Area => UnitArea::ALL,
            Self::Duration => UnitDuration::ALL,
            Self::ElectricCurrent => UnitElectricCurrent::ALL,
            Self::ElectricPotentialDifference => UnitElectricPotentialDifference::ALL,
            Self::ElectricResistance => UnitElectricResistance::ALL,
            Self::Frequency => UnitFrequency::ALL,
            Self::FuelEfficiency => UnitFuelEfficiency::ALL,
            Self::InformationStorage => UnitInformationStorage::ALL,
            Self::Length => UnitLength::ALL,
            Self::Mass => UnitMass::ALL,
            Self::Power => UnitPower::ALL,
            Self::Pressure => UnitPressure::ALL,
            Self::Temperature => UnitTemperature::ALL,
            Self::Volume => UnitVolume::ALL,
        }
    }

    /// Catalog names, parallel to [`Family::units`].
    #[must_use]
    pub const fn unit_names(self) -> &'static [&'static str] {
        match self {
            Self::Angle => UnitAngle::NAMES,
            Self::Area => UnitArea::NAMES,
            Self::Duration => UnitDuration::NAMES,
            Self::ElectricCurrent => UnitElectricCurrent::NAMES,
            Self::ElectricPotentialDifference => UnitElectricPotentialDifference::NAMES,
            Self::ElectricResistance => UnitElectricResistance::NAMES,
            Self::Frequency => UnitFrequency::NAMES,
            Self::FuelEfficiency => UnitFuelEfficiency::NAMES,
            Self::InformationStorage => UnitInformationStorage::NAMES,
            Self::Length => UnitLength::NAMES,
            Self::Mass => UnitMass::NAMES,
            Self::Power => UnitPower::NAMES,
            Self::Pressure => UnitPressure::NAMES,
            Self::Temperature => UnitTemperature::NAMES,
            Self::Volume => UnitVolume::NAMES,
        }
    }

    /// Look a catalog unit up by its exact name, such as `kilograms`.
    #[must_use]
    pub fn unit_by_name(self, name: &str) -> Option<&'static Dimension> {
        self.unit_names()
            .iter()
            .zip(self.units())
            .find_map(|(candidate, unit)| (*candidate == name).then_some(unit))
    }

    /// Kebab-case name, the same one [`Display`](std::fmt::Display) and serde use.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Angle => "angle",
            Self::Area => "area",
            Self::Duration => "duration",
            Self::ElectricCurrent => "electric-current",
            Self::ElectricPotentialDifference => "electric-potential-difference",
            Self::ElectricResistance => "electric-resistance",
            Self::Frequency => "frequency",
            Self::FuelEfficiency => "fuel-efficiency",
            Self::InformationStorage => "information-storage",
            Self::Length => "length",
            Self::Mass => "mass",
            Self::Power => "power",
            Self::Pressure => "pressure",
            Self::Temperature => "temperature",
            Self::Volume => "volume",
        }
    }
}

impl FromStr for Family {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|family| family.name() == name)
            .ok_or_else(|| Error::UnknownFamily(name.to_owned()))
    }
}
