unit_family! {
    /// Units of area, based on square meters.
    UnitArea => Area, base: SQUARE_METERS;

    SQUARE_MEGAMETERS = "square-megameters", "Mm²", linear(1e12);
    SQUARE_KILOMETERS = "square-kilometers", "km²", linear(1e6), tag: "area-square-kilometer";
    SQUARE_METERS = "square-meters", "m²", linear(1.0), tag: "area-square-meter";
    SQUARE_CENTIMETERS = "square-centimeters", "cm²", linear(0.000_1), tag: "area-square-centimeter";
    SQUARE_MILLIMETERS = "square-millimeters", "mm²", linear(0.000_001);
    SQUARE_MICROMETERS = "square-micrometers", "µm²", linear(1e-12);
    SQUARE_NANOMETERS = "square-nanometers", "nm²", linear(1e-18);
    SQUARE_INCHES = "square-inches", "in²", linear(0.000_645_16), tag: "area-square-inch";
    SQUARE_FEET = "square-feet", "ft²", linear(0.092_903), tag: "area-square-foot";
    SQUARE_YARDS = "square-yards", "yd²", linear(0.836_127), tag: "area-square-yard";
    SQUARE_MILES = "square-miles", "mi²", linear(2.59e6), tag: "area-square-mile";
    ACRES = "acres", "ac", linear(4046.86), tag: "area-acre";
    ARES = "ares", "a", linear(100.0);
    HECTARES = "hectares", "ha", linear(10_000.0), tag: "area-hectare";
}
