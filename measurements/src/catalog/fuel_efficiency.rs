unit_family! {
    /// Units of fuel efficiency, based on liters per 100 kilometers.
    ///
    /// Miles per gallon grow as consumption shrinks, so they convert reciprocally.
    UnitFuelEfficiency => FuelEfficiency, base: LITERS_PER_100_KILOMETERS;

    LITERS_PER_100_KILOMETERS = "liters-per-100-kilometers", "L/100km", linear(1.0), tag: "consumption-liter-per-100-kilometer";
    MILES_PER_IMPERIAL_GALLON = "miles-per-imperial-gallon", "mpg", reciprocal(282.481), tag: "consumption-mile-per-gallon-imperial";
    MILES_PER_GALLON = "miles-per-gallon", "mpg", reciprocal(235.215), tag: "consumption-mile-per-gallon";
}
