//! Best Combination Example
//!
//! Loads a catalog and cart from a fixture set and prints the most expensive combination of
//! catalog products that fits the budget.
//!
//! Use `-f` to load a fixture set by name
//! Use `-b` to set the budget, e.g. `-b "250 USD"`
//! Use `--bounded` to search with the branch-and-bound selector

use std::{io, io::Write, time::Instant};

use anyhow::Result;
use clap::Parser;
use humanize_duration::{Truncate, prelude::DurationExt};
use tracing::info;
use tracing_subscriber::EnvFilter;

use storefront::{fixtures::Fixture, quote::Quote, utils::BestCombinationArgs};

/// Best Combination Example
pub fn main() -> Result<()> {
    let args = BestCombinationArgs::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&args.log_level))
        .with_writer(io::stderr)
        .init();

    let fixture = Fixture::from_set(&args.fixture)?;
    let catalog = fixture.catalog()?;
    let budget = args.budget()?;

    info!(fixture = %args.fixture, products = catalog.len(), %budget, "loaded catalog");

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    writeln!(handle, "\nCatalog")?;

    for product in catalog.iter() {
        writeln!(handle, "  {:>3}  {:<16} {}", product.id, product.name, product.price)?;
    }

    writeln!(handle, "\nCart")?;

    for line in fixture.cart().lines(&catalog) {
        writeln!(handle, "  {:<16} x{:<3} {}", line.product.name, line.quantity, line.total()?)?;
    }

    writeln!(handle, "  Subtotal: {}", fixture.cart().subtotal(&catalog)?)?;

    let start = Instant::now();

    let result = if args.bounded {
        catalog.best_combination_bounded(&budget)?
    } else {
        catalog.best_combination(&budget)?
    };

    let elapsed = start.elapsed();

    Quote::from_selection(&catalog, budget, result).write_to(&mut handle)?;

    writeln!(
        handle,
        " {} ({}s)",
        elapsed.human(Truncate::Nano),
        elapsed.as_secs_f32()
    )?;

    Ok(())
}
