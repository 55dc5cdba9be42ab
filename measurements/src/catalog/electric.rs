unit_family! {
    /// Units of electric current, based on amperes.
    UnitElectricCurrent => ElectricCurrent, base: AMPERES;

    MEGAAMPERES = "megaamperes", "MA", linear(1_000_000.0);
    KILOAMPERES = "kiloamperes", "kA", linear(1000.0);
    AMPERES = "amperes", "A", linear(1.0), tag: "electric-ampere";
    DECIAMPERES = "deciamperes", "dA", linear(0.1);
    MILLIAMPERES = "milliamperes", "mA", linear(0.001), tag: "electric-milliampere";
    MICROAMPERES = "microamperes", "µA", linear(0.000_001);
}

unit_family! {
    /// Units of electric potential difference, based on volts.
    UnitElectricPotentialDifference => ElectricPotentialDifference, base: VOLTS;

    MEGAVOLTS = "megavolts", "MV", linear(1_000_000.0);
    KILOVOLTS = "kilovolts", "kV", linear(1000.0);
    VOLTS = "volts", "V", linear(1.0), tag: "electric-volt";
    MILLIVOLTS = "millivolts", "mV", linear(0.001);
    MICROVOLTS = "microvolts", "µV", linear(0.000_001);
}

unit_family! {
    /// Units of electric resistance, based on ohms.
    UnitElectricResistance => ElectricResistance, base: OHMS;

    MEGAOHMS = "megaohms", "MΩ", linear(1_000_000.0);
    KILOOHMS = "kiloohms", "kΩ", linear(1000.0);
    OHMS = "ohms", "Ω", linear(1.0), tag: "electric-ohm";
    MILLIOHMS = "milliohms", "mΩ", linear(0.001);
    MICROOHMS = "microohms", "µΩ", linear(0.000_001);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips() {
        assert_round_trips!(UnitElectricCurrent);
        assert_round_trips!(UnitElectricPotentialDifference);
        assert_round_trips!(UnitElectricResistance);
    }

    #[test]
    fn base_unit() {
        assert_eq!(
            UnitElectricCurrent::MILLIAMPERES.base_unit().unwrap(),
            UnitElectricCurrent::AMPERES,
        );
        assert_eq!(
            UnitElectricPotentialDifference::MICROVOLTS.base_unit().unwrap(),
            UnitElectricPotentialDifference::VOLTS,
        );
        assert_eq!(
            UnitElectricResistance::MICROOHMS.base_unit().unwrap(),
            UnitElectricResistance::OHMS,
        );
    }

    /// Same prefixes and converters, still three distinct families.
    #[test]
    fn families_stay_apart() {
        assert_ne!(
            UnitElectricCurrent::MILLIAMPERES.family(),
            UnitElectricResistance::MILLIOHMS.family(),
        );
        assert_eq!(
            UnitElectricCurrent::MILLIAMPERES.converter(),
            UnitElectricPotentialDifference::MILLIVOLTS.converter(),
        );
    }
}
