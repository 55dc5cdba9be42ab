use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};
use measurements::{Family, UnitConverter};

pub fn build_units_table(family: Family) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_header(vec!["Name", "Symbol", "Converter", "Base"]);
    for (name, unit) in family.unit_names().iter().zip(family.units()) {
        let is_base_unit = unit.is_base_unit();
        table.add_row(vec![
            Cell::new(name),
            Cell::new(unit.symbol()).add_attribute(Attribute::Bold),
            Cell::new(describe_converter(unit.converter()))
                .set_alignment(CellAlignment::Right)
                .add_attribute(Attribute::Dim),
            Cell::new(if is_base_unit { "✓" } else { "" })
                .fg(if is_base_unit { Color::Green } else { Color::Reset }),
        ]);
    }
    table
}

/// How a value maps onto the base unit, `x` being the value.
fn describe_converter(converter: UnitConverter) -> String {
    match converter {
        UnitConverter::Linear { coefficient, constant } if constant == 0.0 => {
            format!("x × {coefficient}")
        }
        UnitConverter::Linear { coefficient, constant } => {
            format!("x × {coefficient} + {constant}")
        }
        UnitConverter::Reciprocal { reciprocal } => format!("{reciprocal} ÷ x"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_converters() {
        assert_eq!(describe_converter(UnitConverter::linear(0.001)), "x × 0.001");
        assert_eq!(
            describe_converter(UnitConverter::linear_with_constant(1.0, 273.15)),
            "x × 1 + 273.15",
        );
        assert_eq!(describe_converter(UnitConverter::reciprocal(235.215)), "235.215 ÷ x");
    }

    #[test]
    fn marks_base_unit() {
        let table = build_units_table(Family::FuelEfficiency).to_string();
        assert!(table.contains("liters-per-100-kilometers"));
        assert!(table.contains('✓'));
        assert!(table.contains("282.481 ÷ x"));
    }
}
