unit_family! {
    /// Units of length, based on meters.
    UnitLength => Length, base: METERS;

    MEGAMETERS = "megameters", "Mm", linear(1_000_000.0);
    KILOMETERS = "kilometers", "km", linear(1000.0), tag: "length-kilometer";
    HECTOMETERS = "hectometers", "hm", linear(100.0);
    DECAMETERS = "decameters", "dam", linear(10.0);
    METERS = "meters", "m", linear(1.0), tag: "length-meter";
    DECIMETERS = "decimeters", "dm", linear(0.1), tag: "length-decimeter";
    CENTIMETERS = "centimeters", "cm", linear(0.01), tag: "length-centimeter";
    MILLIMETERS = "millimeters", "mm", linear(0.001), tag: "length-millimeter";
    MICROMETERS = "micrometers", "µm", linear(0.000_001), tag: "length-micrometer";
    NANOMETERS = "nanometers", "nm", linear(1e-9), tag: "length-nanometer";
    PICOMETERS = "picometers", "pm", linear(1e-12), tag: "length-picometer";
    INCHES = "inches", "in", linear(0.025_4), tag: "length-inch";
    FEET = "feet", "ft", linear(0.304_8), tag: "length-foot";
    YARDS = "yards", "yd", linear(0.914_4), tag: "length-yard";
    MILES = "miles", "mi", linear(1609.34), tag: "length-mile";
    SCANDINAVIAN_MILES = "scandinavian-miles", "smi", linear(10_000.0), tag: "length-mile-scandinavian";
    LIGHTYEARS = "lightyears", "ly", linear(9.460_73e15), tag: "length-light-year";
    NAUTICAL_MILES = "nautical-miles", "NM", linear(1852.0), tag: "length-nautical-mile";
    FATHOMS = "fathoms", "ftm", linear(1.828_8), tag: "length-fathom";
    FURLONGS = "furlongs", "fur", linear(201.168), tag: "length-furlong";
    ASTRONOMICAL_UNITS = "astronomical-units", "ua", linear(1.496e11), tag: "length-astronomical-unit";
    PARSECS = "parsecs", "pc", linear(3.086e16), tag: "length-parsec";
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn round_trips() {
        assert_round_trips!(UnitLength);
    }

    #[test]
    fn base_unit() {
        assert_eq!(UnitLength::ASTRONOMICAL_UNITS.base_unit().unwrap(), UnitLength::METERS);
    }

    #[test]
    fn mile_in_feet() {
        let meters = UnitLength::MILES.converter().base_value(1.0);
        let feet = UnitLength::FEET.converter().value(meters);
        assert_relative_eq!(feet, 5280.0, max_relative = 1e-5);
    }
}
