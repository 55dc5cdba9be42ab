/// Declare a unit family: a namespace of catalog constants sharing one base unit.
///
/// Each entry reads `CONSTANT = "catalog-name", "symbol", converter(arguments)`, optionally
/// followed by `tag: "format-tag"`. The converter is any [`crate::UnitConverter`] constructor.
macro_rules! unit_family {
    (@tag) => {
        None
    };

    (@tag $tag:literal) => {
        Some($crate::FormatTag::from_static($tag))
    };

    (
        $(#[$meta:meta])*
        $namespace:ident => $family:ident, base: $base:ident;
        $(
            $(#[$unit_meta:meta])*
            $constant:ident = $name:literal, $symbol:literal, $converter:ident($($argument:expr),+)
            $(, tag: $tag:literal)?;
        )+
    ) => {
        $(#[$meta])*
        pub struct $namespace;

        impl $namespace {
            $(
                $(#[$unit_meta])*
                pub const $constant: $crate::Dimension = $crate::Dimension::from_parts(
                    $symbol,
                    $crate::UnitConverter::$converter($($argument),+),
                    unit_family!(@tag $($tag)?),
                    Some($crate::Family::$family),
                );
            )+

            pub const BASE: $crate::Dimension = Self::$base;

            pub const ALL: &[$crate::Dimension] = &[$(Self::$constant),+];

            pub const NAMES: &[&str] = &[$($name),+];

            /// Create a custom member of the family.
            #[must_use]
            pub fn new(
                symbol: impl Into<::std::borrow::Cow<'static, str>>,
                converter: $crate::UnitConverter,
            ) -> $crate::Dimension {
                $crate::Dimension::in_family(symbol, converter, $crate::Family::$family)
            }

            #[must_use]
            pub fn by_name(name: &str) -> Option<&'static $crate::Dimension> {
                $crate::Family::$family.unit_by_name(name)
            }
        }
    };
}

/// Assert the catalog round trip `value(base_value(1)) ≈ 1` for every unit of a family.
#[cfg(test)]
macro_rules! assert_round_trips {
    ($namespace:ident) => {
        for unit in $namespace::ALL {
            let converter = unit.converter();
            let value = converter.value(converter.base_value(1.0));
            assert!((value - 1.0).abs() < 1e-9, "{}: {value}", unit.symbol());
        }
    };
}
