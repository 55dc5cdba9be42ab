unit_family! {
    /// Units of duration, based on seconds.
    UnitDuration => Duration, base: SECONDS;

    SECONDS = "seconds", "s", linear(1.0), tag: "duration-second";
    MINUTES = "minutes", "m", linear(60.0), tag: "duration-minute";
    HOURS = "hours", "h", linear(3600.0), tag: "duration-hour";
}
