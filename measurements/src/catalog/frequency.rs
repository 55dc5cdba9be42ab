unit_family! {
    /// Units of frequency, based on hertz.
    UnitFrequency => Frequency, base: HERTZ;

    TERAHERTZ = "terahertz", "THz", linear(1e12);
    GIGAHERTZ = "gigahertz", "GHz", linear(1e9), tag: "frequency-gigahertz";
    MEGAHERTZ = "megahertz", "MHz", linear(1e6), tag: "frequency-megahertz";
    KILOHERTZ = "kilohertz", "kHz", linear(1000.0), tag: "frequency-kilohertz";
    HERTZ = "hertz", "Hz", linear(1.0), tag: "frequency-hertz";
    MILLIHERTZ = "millihertz", "mHz", linear(0.001);
    MICROHERTZ = "microhertz", "µHz", linear(0.000_001);
    NANOHERTZ = "nanohertz", "nHz", linear(1e-9);
}
