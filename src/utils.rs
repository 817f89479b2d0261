//! Utils

use clap::Parser;
use rusty_money::{Money, iso::Currency};

use crate::fixtures::{FixtureError, products::parse_price};

/// Arguments for the best combination demo
#[derive(Debug, Parser)]
pub struct BestCombinationArgs {
    /// Fixture set to load the catalog & cart from
    #[clap(short, long, default_value = "storefront")]
    pub fixture: String,

    /// Spending limit (e.g., "250 USD")
    #[clap(short, long, default_value = "250 USD")]
    pub budget: String,

    /// Use the branch-and-bound selector
    #[clap(long)]
    pub bounded: bool,

    /// Log level (trace, debug, info, warn, error)
    #[clap(short, long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,
}

impl BestCombinationArgs {
    /// Parse the budget argument.
    ///
    /// # Errors
    ///
    /// Returns an error if the budget is not in the format "AMOUNT CURRENCY" or is not a whole
    /// number of minor units.
    pub fn budget(&self) -> Result<Money<'static, Currency>, FixtureError> {
        let (minor_units, currency) = parse_price(&self.budget)?;

        Ok(Money::from_minor(minor_units, currency))
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::GBP;

    use super::*;

    #[test]
    fn budget_parses_amount_and_currency() -> Result<(), FixtureError> {
        let args = BestCombinationArgs::parse_from(["demo", "--budget", "12.50 GBP"]);

        assert_eq!(args.budget()?, Money::from_minor(1250, GBP));
        assert_eq!(args.fixture, "storefront");
        assert!(!args.bounded);

        Ok(())
    }

    #[test]
    fn budget_with_fractional_cents_is_rejected() {
        let args = BestCombinationArgs::parse_from(["demo", "--budget", "249.995 USD"]);

        assert!(matches!(args.budget(), Err(FixtureError::InvalidPrice(_))));
    }
}
