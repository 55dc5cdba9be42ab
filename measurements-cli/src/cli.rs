mod compare;
mod convert;
mod sum;
mod units;

use clap::{Parser, Subcommand};
use measurements::{Dimension, Family, FormatOptions, Locale, LongNames, MeasureFormat};

use crate::{
    cli::{compare::CompareArgs, convert::ConvertArgs, sum::SumArgs, units::UnitsArgs},
    prelude::*,
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[clap(flatten)]
    pub format: FormatArgs,

    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    /// Execute the command and return what is to be printed.
    pub fn run(self) -> Result<String> {
        let options = self.format.options();
        match self.command {
            Command::Convert(args) => args.run(&options),
            Command::Sum(args) => args.run(&options),
            Command::Compare(args) => args.run(),
            Command::Units(args) => Ok(args.run()),
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert a measurement to another unit of the same family.
    #[clap(name = "convert")]
    Convert(ConvertArgs),

    /// Add measurements of one family up.
    #[clap(name = "sum")]
    Sum(SumArgs),

    /// Compare two measurements of one family, printing `<`, `=`, or `>`.
    #[clap(name = "compare")]
    Compare(CompareArgs),

    /// List the units of a family.
    #[clap(name = "units")]
    Units(UnitsArgs),
}

#[derive(clap::Args)]
pub struct FormatArgs {
    /// Maximum number of digits after the decimal separator.
    #[clap(long, env = "MEASURE_FRACTION_DIGITS", default_value = "2", global = true)]
    pub fraction_digits: u32,

    /// Locale to pick the number separators from.
    #[clap(long, env = "MEASURE_LOCALE", default_value = "en-US", global = true)]
    pub locale: Locale,

    /// Spell the unit names out instead of using the symbols.
    #[clap(long, global = true)]
    pub long: bool,
}

impl FormatArgs {
    pub fn options(&self) -> FormatOptions<'static> {
        let phrases: &'static dyn MeasureFormat = &LongNames;
        FormatOptions::builder()
            .maximum_fraction_digits(self.fraction_digits)
            .locale(self.locale)
            .maybe_phrases(self.long.then_some(phrases))
            .build()
    }
}

/// Find the catalog unit by its exact name.
fn find_unit(family: Family, name: &str) -> Result<Dimension> {
    family
        .unit_by_name(name)
        .cloned()
        .with_context(|| format!("`{name}` is not a {family} unit, see `measure units {family}`"))
}

/// Parse a measurement value, which may be negative.
fn parse_value(value: &str) -> Result<f64> {
    value.parse().with_context(|| format!("`{value}` is not a number"))
}
