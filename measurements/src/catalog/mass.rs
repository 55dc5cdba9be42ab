unit_family! {
    /// Units of mass, based on kilograms.
    UnitMass => Mass, base: KILOGRAMS;

    KILOGRAMS = "kilograms", "kg", linear(1.0), tag: "mass-kilogram";
    GRAMS = "grams", "g", linear(0.001), tag: "mass-gram";
    DECIGRAMS = "decigrams", "dg", linear(0.000_1);
    CENTIGRAMS = "centigrams", "cg", linear(0.000_01);
    MILLIGRAMS = "milligrams", "mg", linear(0.000_001), tag: "mass-milligram";
    MICROGRAMS = "micrograms", "µg", linear(1e-9), tag: "mass-microgram";
    NANOGRAMS = "nanograms", "ng", linear(1e-12);
    PICOGRAMS = "picograms", "pg", linear(1e-15);
    OUNCES = "ounces", "oz", linear(0.028_349_5), tag: "mass-ounce";
    POUNDS = "pounds", "lb", linear(0.453_592), tag: "mass-pound";
    STONES = "stones", "st", linear(6.350_29), tag: "mass-stone";
    METRIC_TONS = "metric-tons", "t", linear(1000.0), tag: "mass-tonne";
    SHORT_TONS = "short-tons", "ton", linear(907.185), tag: "mass-ton";
    CARATS = "carats", "ct", linear(0.000_2), tag: "mass-carat";
    OUNCES_TROY = "troy-ounces", "oz t", linear(0.031_103_48), tag: "mass-ounce-troy";
    SLUGS = "slugs", "slug", linear(14.593_9);
}
