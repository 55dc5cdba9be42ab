unit_family! {
    /// Units of pressure, based on pascals.
    UnitPressure => Pressure, base: PASCALS;

    PASCALS = "pascals", "Pa", linear(1.0), tag: "pressure-pascal";
    NEWTONS_PER_METERS_SQUARED = "newtons-per-meters-squared", "N/m²", linear(1.0);
    GIGAPASCALS = "gigapascals", "GPa", linear(1e9);
    MEGAPASCALS = "megapascals", "MPa", linear(1e6), tag: "pressure-megapascal";
    KILOPASCALS = "kilopascals", "kPa", linear(1000.0), tag: "pressure-kilopascal";
    HECTOPASCALS = "hectopascals", "hPa", linear(100.0), tag: "pressure-hectopascal";
    INCHES_OF_MERCURY = "inches-of-mercury", "inHg", linear(3386.39), tag: "pressure-inch-ofhg";
    BARS = "bars", "bar", linear(100_000.0), tag: "pressure-bar";
    MILLIBARS = "millibars", "mbar", linear(100.0), tag: "pressure-millibar";
    MILLIMETERS_OF_MERCURY = "millimeters-of-mercury", "mmHg", linear(133.322), tag: "pressure-millimeter-ofhg";
    POUNDS_FORCE_PER_SQUARE_INCH = "pounds-force-per-square-inch", "psi", linear(6894.76), tag: "pressure-pound-force-per-square-inch";
}
