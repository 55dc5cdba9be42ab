use std::cmp::Ordering;

use clap::Parser;
use measurements::{Family, Measurement};

use crate::{cli::find_unit, prelude::*};

#[derive(Parser)]
pub struct CompareArgs {
    /// Unit family, for example `mass` or `length`.
    family: Family,

    #[clap(allow_negative_numbers = true)]
    lhs_value: f64,

    lhs_unit: String,

    #[clap(allow_negative_numbers = true)]
    rhs_value: f64,

    rhs_unit: String,
}

impl CompareArgs {
    pub fn run(self) -> Result<String> {
        let lhs = Measurement::new(self.lhs_value, find_unit(self.family, &self.lhs_unit)?);
        let rhs = Measurement::new(self.rhs_value, find_unit(self.family, &self.rhs_unit)?);
        let sign = match lhs.try_cmp(&rhs)? {
            Ordering::Less => "<",
            Ordering::Equal => "=",
            Ordering::Greater => ">",
        };
        Ok(sign.to_owned())
    }
}
