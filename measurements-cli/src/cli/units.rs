use clap::Parser;
use measurements::Family;

use crate::tables::build_units_table;

#[derive(Parser)]
pub struct UnitsArgs {
    /// Unit family, for example `mass` or `pressure`.
    family: Family,
}

impl UnitsArgs {
    pub fn run(self) -> String {
        build_units_table(self.family).to_string()
    }
}

#[cfg(test)]
mod tests {
    use crate::cli::tests::run;

    #[test]
    fn lists_catalog() {
        let output = run(&["units", "mass"]).unwrap();
        assert!(output.contains("kilograms"));
        assert!(output.contains("troy-ounces"));
        assert!(output.contains("oz t"));
    }
}
