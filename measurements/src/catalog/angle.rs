unit_family! {
    /// Units of plane angle, based on degrees.
    UnitAngle => Angle, base: DEGREES;

    DEGREES = "degrees", "°", linear(1.0), tag: "angle-degree";
    ARC_MINUTES = "arc-minutes", "ʹ", linear(1.0 / 60.0), tag: "angle-arc-minute";
    ARC_SECONDS = "arc-seconds", "ʺ", linear(1.0 / 3600.0), tag: "angle-arc-second";
    RADIANS = "radians", "rad", linear(57.295_8), tag: "angle-radian";
    GRADIANS = "gradians", "grad", linear(0.9);
    REVOLUTIONS = "revolutions", "rev", linear(360.0), tag: "angle-revolution";
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn round_trips() {
        assert_round_trips!(UnitAngle);
    }

    #[test]
    fn base_unit() {
        let base_unit = UnitAngle::ARC_MINUTES.base_unit().unwrap();
        assert_eq!(base_unit.symbol(), UnitAngle::DEGREES.symbol());
    }

    #[test]
    fn revolution_in_gradians() {
        let degrees = UnitAngle::REVOLUTIONS.converter().base_value(1.0);
        assert_abs_diff_eq!(UnitAngle::GRADIANS.converter().value(degrees), 400.0, epsilon = 1e-9);
    }
}
