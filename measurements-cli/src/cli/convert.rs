use clap::Parser;
use measurements::{Family, FormatOptions, Measurement};

use crate::{cli::find_unit, prelude::*};

#[derive(Parser)]
pub struct ConvertArgs {
    /// Unit family, for example `mass` or `fuel-efficiency`.
    family: Family,

    #[clap(allow_negative_numbers = true)]
    value: f64,

    /// Catalog name of the unit the value is expressed in.
    from: String,

    /// Catalog name of the unit to convert to.
    to: String,
}

impl ConvertArgs {
    pub fn run(self, options: &FormatOptions<'_>) -> Result<String> {
        let from = find_unit(self.family, &self.from)?;
        let to = find_unit(self.family, &self.to)?;
        let converted = Measurement::new(self.value, from).converted(&to)?;
        debug!(value = converted.value(), unit = to.symbol(), "converted");
        Ok(converted.format_with(options))
    }
}
