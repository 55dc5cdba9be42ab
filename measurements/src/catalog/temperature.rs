unit_family! {
    /// Units of temperature, based on kelvin. Celsius and Fahrenheit scales are offset.
    UnitTemperature => Temperature, base: KELVIN;

    KELVIN = "kelvin", "K", linear(1.0), tag: "temperature-kelvin";
    CELSIUS = "celsius", "°C", linear_with_constant(1.0, 273.15), tag: "temperature-celsius";
    FAHRENHEIT = "fahrenheit", "°F", linear_with_constant(5.0 / 9.0, 273.15 - 32.0 * 5.0 / 9.0), tag: "temperature-fahrenheit";
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn round_trips() {
        assert_round_trips!(UnitTemperature);
    }

    #[test]
    fn base_unit() {
        assert_eq!(UnitTemperature::CELSIUS.base_unit().unwrap(), UnitTemperature::KELVIN);
    }

    #[test]
    fn boiling_point() {
        let kelvin = UnitTemperature::CELSIUS.converter().base_value(100.0);
        assert_abs_diff_eq!(kelvin, 373.15, epsilon = 1e-9);
        let fahrenheit = UnitTemperature::FAHRENHEIT.converter().value(kelvin);
        assert_abs_diff_eq!(fahrenheit, 212.0, epsilon = 1e-9);
    }
}
