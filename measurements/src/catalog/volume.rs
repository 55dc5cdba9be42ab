unit_family! {
    /// Units of volume, based on liters.
    ///
    /// Customary and imperial kitchen measures share their symbols, only the catalog name tells
    /// them apart.
    UnitVolume => Volume, base: LITERS;

    MEGALITERS = "megaliters", "ML", linear(1_000_000.0), tag: "volume-megaliter";
    KILOLITERS = "kiloliters", "kL", linear(1000.0);
    LITERS = "liters", "L", linear(1.0), tag: "volume-liter";
    DECILITERS = "deciliters", "dL", linear(0.1), tag: "volume-deciliter";
    CENTILITERS = "centiliters", "cL", linear(0.01), tag: "volume-centiliter";
    MILLILITERS = "milliliters", "mL", linear(0.001), tag: "volume-milliliter";
    CUBIC_KILOMETERS = "cubic-kilometers", "km³", linear(1e12), tag: "volume-cubic-kilometer";
    CUBIC_METERS = "cubic-meters", "m³", linear(1000.0), tag: "volume-cubic-meter";
    CUBIC_DECIMETERS = "cubic-decimeters", "dm³", linear(1.0);
    CUBIC_CENTIMETERS = "cubic-centimeters", "cm³", linear(0.001), tag: "volume-cubic-centimeter";
    CUBIC_MILLIMETERS = "cubic-millimeters", "mm³", linear(0.000_001);
    CUBIC_INCHES = "cubic-inches", "in³", linear(0.016_387_1), tag: "volume-cubic-inch";
    CUBIC_FEET = "cubic-feet", "ft³", linear(28.316_8), tag: "volume-cubic-foot";
    CUBIC_YARDS = "cubic-yards", "yd³", linear(764.555), tag: "volume-cubic-yard";
    CUBIC_MILES = "cubic-miles", "mi³", linear(4.168e12), tag: "volume-cubic-mile";
    ACRE_FEET = "acre-feet", "af", linear(1.233e6), tag: "volume-acre-foot";
    BUSHELS = "bushels", "bsh", linear(35.239_1), tag: "volume-bushel";
    TEASPOONS = "teaspoons", "tsp", linear(0.004_928_92), tag: "volume-teaspoon";
    TABLESPOONS = "tablespoons", "tbsp", linear(0.014_786_8), tag: "volume-tablespoon";
    FLUID_OUNCES = "fluid-ounces", "fl oz", linear(0.029_573_5), tag: "volume-fluid-ounce";
    CUPS = "cups", "cup", linear(0.24), tag: "volume-cup";
    PINTS = "pints", "pt", linear(0.473_176), tag: "volume-pint";
    QUARTS = "quarts", "qt", linear(0.946_353), tag: "volume-quart";
    GALLONS = "gallons", "gal", linear(3.785_41), tag: "volume-gallon";
    IMPERIAL_TEASPOONS = "imperial-teaspoons", "tsp", linear(0.005_919_39);
    IMPERIAL_TABLESPOONS = "imperial-tablespoons", "tbsp", linear(0.017_758_2);
    IMPERIAL_FLUID_OUNCES = "imperial-fluid-ounces", "fl oz", linear(0.028_413_1), tag: "volume-fluid-ounce-imperial";
    IMPERIAL_PINTS = "imperial-pints", "pt", linear(0.568_261);
    IMPERIAL_QUARTS = "imperial-quarts", "qt", linear(1.136_52);
    IMPERIAL_GALLONS = "imperial-gallons", "gal", linear(4.546_09), tag: "volume-gallon-imperial";
    METRIC_CUPS = "metric-cups", "metric cup", linear(0.25), tag: "volume-cup-metric";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UnitLike;

    #[test]
    fn round_trips() {
        assert_round_trips!(UnitVolume);
    }

    #[test]
    fn base_unit() {
        let base_unit = UnitVolume::CUBIC_DECIMETERS.base_unit().unwrap();
        assert_eq!(base_unit.symbol(), UnitVolume::LITERS.symbol());
        assert!(!UnitVolume::CUBIC_DECIMETERS.is_base_unit());
    }

    #[test]
    fn imperial_measures_differ_from_customary() {
        assert!(UnitVolume::GALLONS.as_unit().eq_unit(UnitVolume::IMPERIAL_GALLONS.as_unit()));
        assert_ne!(UnitVolume::GALLONS, UnitVolume::IMPERIAL_GALLONS);
    }
}
