//! Prices

use rust_decimal::RoundingStrategy;
use rusty_money::{Money, MoneyError, iso::Currency};
use thiserror::Error;

use crate::products::Product;

/// Errors that can occur while calculating total price.
#[derive(Debug, Error, PartialEq)]
pub enum TotalPriceError {
    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Calculates the total price of a sequence of products.
///
/// An empty sequence totals zero in the given currency.
///
/// # Errors
///
/// - [`TotalPriceError::Money`]: a product is priced in a currency other than `currency`.
pub fn total_price<'p, 'a: 'p>(
    products: impl IntoIterator<Item = &'p Product<'a>>,
    currency: &'a Currency,
) -> Result<Money<'a, Currency>, TotalPriceError> {
    let total = products
        .into_iter()
        .try_fold(Money::from_minor(0, currency), |acc, product| {
            acc.add(product.price)
        })?;

    Ok(total)
}

/// Converts an amount to whole minor units, rounding any fraction of a minor unit with
/// `strategy`.
///
/// Amounts outside the `i64` range saturate.
pub fn minor_units_rounded(amount: &Money<'_, Currency>, strategy: RoundingStrategy) -> i64 {
    let currency = amount.currency();
    let rounded = amount
        .amount()
        .round_dp_with_strategy(currency.exponent, strategy);

    Money::from_decimal(rounded, currency)
        .try_to_minor_units()
        .unwrap_or(if rounded.is_sign_negative() {
            i64::MIN
        } else {
            i64::MAX
        })
}
