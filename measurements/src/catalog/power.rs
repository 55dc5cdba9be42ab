unit_family! {
    /// Units of power, based on watts.
    UnitPower => Power, base: WATTS;

    TERAWATTS = "terawatts", "TW", linear(1e12);
    GIGAWATTS = "gigawatts", "GW", linear(1e9), tag: "power-gigawatt";
    MEGAWATTS = "megawatts", "MW", linear(1e6), tag: "power-megawatt";
    KILOWATTS = "kilowatts", "kW", linear(1000.0), tag: "power-kilowatt";
    WATTS = "watts", "W", linear(1.0), tag: "power-watt";
    MILLIWATTS = "milliwatts", "mW", linear(0.001), tag: "power-milliwatt";
    MICROWATTS = "microwatts", "µW", linear(0.000_001);
    NANOWATTS = "nanowatts", "nW", linear(1e-9);
    PICOWATTS = "picowatts", "pW", linear(1e-12);
    FEMTOWATTS = "femtowatts", "fW", linear(1e-15);
    HORSEPOWER = "horsepower", "hp", linear(745.7), tag: "power-horsepower";
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn round_trips() {
        assert_round_trips!(UnitPower);
    }

    #[test]
    fn base_unit() {
        assert_eq!(UnitPower::MICROWATTS.base_unit().unwrap().symbol(), UnitPower::WATTS.symbol());
    }

    #[test]
    fn horsepower_in_kilowatts() {
        let watts = UnitPower::HORSEPOWER.converter().base_value(1.0);
        assert_abs_diff_eq!(UnitPower::KILOWATTS.converter().value(watts), 0.7457, epsilon = 1e-12);
    }
}
