use crate::{
    FormatTag,
    format::{FormatOptions, MeasureFormat, format_number},
};

/// English long unit names: `1 kilogram`, `1,234.5 kilograms`.
///
/// Numbers follow the locale of the options, with grouping. Only the unit names are English.
#[derive(Copy, Clone, Debug, Default)]
pub struct LongNames;

/// Tag, singular, plural.
const NAMES: &[(&str, &str, &str)] = &[
    ("angle-arc-minute", "arcminute", "arcminutes"),
    ("angle-arc-second", "arcsecond", "arcseconds"),
    ("angle-degree", "degree", "degrees"),
    ("angle-radian", "radian", "radians"),
    ("angle-revolution", "revolution", "revolutions"),
    ("area-acre", "acre", "acres"),
    ("area-hectare", "hectare", "hectares"),
    ("area-square-centimeter", "square centimeter", "square centimeters"),
    ("area-square-foot", "square foot", "square feet"),
    ("area-square-inch", "square inch", "square inches"),
    ("area-square-kilometer", "square kilometer", "square kilometers"),
    ("area-square-meter", "square meter", "square meters"),
    ("area-square-mile", "square mile", "square miles"),
    ("area-square-yard", "square yard", "square yards"),
    (
        "consumption-liter-per-100-kilometer",
        "liter per 100 kilometers",
        "liters per 100 kilometers",
    ),
    ("consumption-mile-per-gallon", "mile per gallon", "miles per gallon"),
    ("consumption-mile-per-gallon-imperial", "mile per Imp. gallon", "miles per Imp. gallon"),
    ("digital-bit", "bit", "bits"),
    ("digital-byte", "byte", "bytes"),
    ("digital-gigabit", "gigabit", "gigabits"),
    ("digital-gigabyte", "gigabyte", "gigabytes"),
    ("digital-kilobit", "kilobit", "kilobits"),
    ("digital-kilobyte", "kilobyte", "kilobytes"),
    ("digital-megabit", "megabit", "megabits"),
    ("digital-megabyte", "megabyte", "megabytes"),
    ("digital-petabyte", "petabyte", "petabytes"),
    ("digital-terabit", "terabit", "terabits"),
    ("digital-terabyte", "terabyte", "terabytes"),
    ("duration-hour", "hour", "hours"),
    ("duration-minute", "minute", "minutes"),
    ("duration-second", "second", "seconds"),
    ("electric-ampere", "ampere", "amperes"),
    ("electric-milliampere", "milliampere", "milliamperes"),
    ("electric-ohm", "ohm", "ohms"),
    ("electric-volt", "volt", "volts"),
    ("frequency-gigahertz", "gigahertz", "gigahertz"),
    ("frequency-hertz", "hertz", "hertz"),
    ("frequency-kilohertz", "kilohertz", "kilohertz"),
    ("frequency-megahertz", "megahertz", "megahertz"),
    ("length-astronomical-unit", "astronomical unit", "astronomical units"),
    ("length-centimeter", "centimeter", "centimeters"),
    ("length-decimeter", "decimeter", "decimeters"),
    ("length-fathom", "fathom", "fathoms"),
    ("length-foot", "foot", "feet"),
    ("length-furlong", "furlong", "furlongs"),
    ("length-inch", "inch", "inches"),
    ("length-kilometer", "kilometer", "kilometers"),
    ("length-light-year", "light year", "light years"),
    ("length-meter", "meter", "meters"),
    ("length-micrometer", "micrometer", "micrometers"),
    ("length-mile", "mile", "miles"),
    ("length-mile-scandinavian", "mile-scandinavian", "miles-scandinavian"),
    ("length-millimeter", "millimeter", "millimeters"),
    ("length-nanometer", "nanometer", "nanometers"),
    ("length-nautical-mile", "nautical mile", "nautical miles"),
    ("length-parsec", "parsec", "parsecs"),
    ("length-picometer", "picometer", "picometers"),
    ("length-yard", "yard", "yards"),
    ("mass-carat", "carat", "carats"),
    ("mass-gram", "gram", "grams"),
    ("mass-kilogram", "kilogram", "kilograms"),
    ("mass-microgram", "microgram", "micrograms"),
    ("mass-milligram", "milligram", "milligrams"),
    ("mass-ounce", "ounce", "ounces"),
    ("mass-ounce-troy", "troy ounce", "troy ounces"),
    ("mass-pound", "pound", "pounds"),
    ("mass-stone", "stone", "stones"),
    ("mass-ton", "ton", "tons"),
    ("mass-tonne", "metric ton", "metric tons"),
    ("power-gigawatt", "gigawatt", "gigawatts"),
    ("power-horsepower", "horsepower", "horsepower"),
    ("power-kilowatt", "kilowatt", "kilowatts"),
    ("power-megawatt", "megawatt", "megawatts"),
    ("power-milliwatt", "milliwatt", "milliwatts"),
    ("power-watt", "watt", "watts"),
    ("pressure-bar", "bar", "bars"),
    ("pressure-hectopascal", "hectopascal", "hectopascals"),
    ("pressure-inch-ofhg", "inch of mercury", "inches of mercury"),
    ("pressure-kilopascal", "kilopascal", "kilopascals"),
    ("pressure-megapascal", "megapascal", "megapascals"),
    ("pressure-millibar", "millibar", "millibars"),
    ("pressure-millimeter-ofhg", "millimeter of mercury", "millimeters of mercury"),
    ("pressure-pascal", "pascal", "pascals"),
    (
        "pressure-pound-force-per-square-inch",
        "pound-force per square inch",
        "pounds-force per square inch",
    ),
    ("temperature-celsius", "degree Celsius", "degrees Celsius"),
    ("temperature-fahrenheit", "degree Fahrenheit", "degrees Fahrenheit"),
    ("temperature-kelvin", "kelvin", "kelvins"),
    ("volume-acre-foot", "acre-foot", "acre-feet"),
    ("volume-bushel", "bushel", "bushels"),
    ("volume-centiliter", "centiliter", "centiliters"),
    ("volume-cubic-centimeter", "cubic centimeter", "cubic centimeters"),
    ("volume-cubic-foot", "cubic foot", "cubic feet"),
    ("volume-cubic-inch", "cubic inch", "cubic inches"),
    ("volume-cubic-kilometer", "cubic kilometer", "cubic kilometers"),
    ("volume-cubic-meter", "cubic meter", "cubic meters"),
    ("volume-cubic-mile", "cubic mile", "cubic miles"),
    ("volume-cubic-yard", "cubic yard", "cubic yards"),
    ("volume-cup", "cup", "cups"),
    ("volume-cup-metric", "metric cup", "metric cups"),
    ("volume-deciliter", "deciliter", "deciliters"),
    ("volume-fluid-ounce", "fluid ounce", "fluid ounces"),
    ("volume-fluid-ounce-imperial", "Imp. fluid ounce", "Imp. fluid ounces"),
    ("volume-gallon", "gallon", "gallons"),
    ("volume-gallon-imperial", "Imp. gallon", "Imp. gallons"),
    ("volume-liter", "liter", "liters"),
    ("volume-megaliter", "megaliter", "megaliters"),
    ("volume-milliliter", "milliliter", "milliliters"),
    ("volume-pint", "pint", "pints"),
    ("volume-quart", "quart", "quarts"),
    ("volume-tablespoon", "tablespoon", "tablespoons"),
    ("volume-teaspoon", "teaspoon", "teaspoons"),
];

impl MeasureFormat for LongNames {
    fn format(&self, value: f64, tag: &FormatTag, options: &FormatOptions<'_>) -> Option<String> {
        let (_, one, other) = NAMES.iter().find(|(candidate, _, _)| *candidate == tag.as_str())?;
        let number = format_number(value, options.maximum_fraction_digits, options.locale, true);
        let name = if number == "1" { one } else { other };
        Some(format!("{number} {name}"))
    }
}
