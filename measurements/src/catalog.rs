//! Predefined units, one namespace per [`crate::Family`].

#[macro_use]
mod macros;

mod angle;
mod area;
mod duration;
mod electric;
mod frequency;
mod fuel_efficiency;
mod information_storage;
mod length;
mod mass;
mod power;
mod pressure;
mod temperature;
mod volume;

pub use self::{
    angle::UnitAngle,
    area::UnitArea,
    duration::UnitDuration,
    electric::{UnitElectricCurrent, UnitElectricPotentialDifference, UnitElectricResistance},
    frequency::UnitFrequency,
    fuel_efficiency::UnitFuelEfficiency,
    information_storage::UnitInformationStorage,
    length::UnitLength,
    mass::UnitMass,
    power::UnitPower,
    pressure::UnitPressure,
    temperature::UnitTemperature,
    volume::UnitVolume,
};
