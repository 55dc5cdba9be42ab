use clap::Parser;
use itertools::Itertools;
use measurements::{Dimension, Family, FormatOptions, Measurement};

use crate::{
    cli::{find_unit, parse_value},
    prelude::*,
};

#[derive(Parser)]
pub struct SumArgs {
    /// Unit family, for example `mass` or `length`.
    family: Family,

    /// Catalog name of the unit to express the total in.
    #[clap(long)]
    to: Option<String>,

    /// Values followed by their unit names: `1 kilograms 300 grams`.
    #[clap(required = true, num_args = 2.., allow_negative_numbers = true)]
    terms: Vec<String>,
}

impl SumArgs {
    pub fn run(self, options: &FormatOptions<'_>) -> Result<String> {
        ensure!(self.terms.len().is_multiple_of(2), "every value must be followed by a unit name");
        let measurements: Vec<Measurement<Dimension>> = self
            .terms
            .iter()
            .tuples()
            .map(|(value, unit)| {
                Ok(Measurement::new(parse_value(value)?, find_unit(self.family, unit)?))
            })
            .collect::<Result<_>>()?;
        info!(n_measurements = measurements.len(), "summing…");
        let total = Measurement::sum(measurements)?.context("there is nothing to sum")?;
        let total = match &self.to {
            Some(to) => total.converted(&find_unit(self.family, to)?)?,
            None => total,
        };
        Ok(total.format_with(options))
    }
}
