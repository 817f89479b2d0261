//! Integration tests for the best combination of catalog products within a budget

use rusty_money::{Money, iso::USD};
use testresult::TestResult;

use storefront::{
    catalog::Catalog,
    pricing::total_price,
    products::Product,
    solvers::{Selector, bounded::BoundedSelector, exhaustive::ExhaustiveSelector, select},
};

fn dollars(amount: i64) -> Money<'static, rusty_money::iso::Currency> {
    Money::from_major(amount, USD)
}

fn abc<'a>() -> Vec<Product<'a>> {
    vec![
        Product::new(1, "A", dollars(100)),
        Product::new(2, "B", dollars(150)),
        Product::new(3, "C", dollars(200)),
    ]
}

fn names(products: impl IntoIterator<Item = impl AsRef<str>>) -> Vec<String> {
    products
        .into_iter()
        .map(|name| name.as_ref().to_string())
        .collect()
}

#[test]
fn budget_of_250_buys_a_and_b() -> TestResult {
    let catalog = Catalog::with_products(abc(), USD)?;

    let result = catalog.best_combination(&dollars(250))?;

    assert_eq!(
        names(result.iter().map(|p| p.name.as_str())),
        vec!["A", "B"]
    );
    assert_eq!(result.total(USD), dollars(250));
    assert_eq!(total_price(result.iter(), USD)?, dollars(250));

    Ok(())
}

#[test]
fn budget_of_500_buys_the_whole_catalog() -> TestResult {
    let catalog = Catalog::with_products(abc(), USD)?;

    let result = catalog.best_combination(&dollars(500))?;

    assert_eq!(result.to_products(), abc());
    assert_eq!(result.total(USD), dollars(450));

    Ok(())
}

#[test]
fn equal_totals_prefer_the_earlier_product() -> TestResult {
    let catalog = Catalog::with_products(
        [
            Product::new(1, "A", dollars(120)),
            Product::new(2, "B", dollars(120)),
            Product::new(3, "C", dollars(10)),
        ],
        USD,
    )?;

    let result = catalog.best_combination(&dollars(130))?;

    assert_eq!(
        names(result.iter().map(|p| p.name.as_str())),
        vec!["A", "C"]
    );
    assert_eq!(result.total(USD), dollars(130));

    Ok(())
}

#[test]
fn tie_between_disjoint_subsets_keeps_the_earliest_product() {
    // {1, 4} and {2, 3} both total 100.
    let products = [
        Product::new(1, "W", dollars(60)),
        Product::new(2, "X", dollars(70)),
        Product::new(3, "Y", dollars(30)),
        Product::new(4, "Z", dollars(40)),
    ];

    let result = select(&products, dollars(100).to_minor_units());

    assert_eq!(result.indices.as_slice(), &[0, 3]);
}

#[test]
fn empty_catalog_selects_nothing_for_any_budget() {
    for budget in [0, 1, 10_000] {
        let result = select(&[], budget);

        assert!(result.is_empty(), "budget {budget} selected something");
        assert_eq!(result.total_minor, 0);
    }
}

#[test]
fn zero_budget_selects_nothing() {
    let products = abc();

    assert!(ExhaustiveSelector::select(&products, 0).is_empty());
    assert!(BoundedSelector::select(&products, 0).is_empty());
}

#[test]
fn negative_budget_selects_nothing() {
    let products = abc();

    assert!(ExhaustiveSelector::select(&products, -100).is_empty());
    assert!(BoundedSelector::select(&products, -100).is_empty());
}

#[test]
fn nothing_affordable_selects_nothing() -> TestResult {
    let catalog = Catalog::with_products(abc(), USD)?;

    let result = catalog.best_combination(&dollars(99))?;

    assert!(result.is_empty());

    Ok(())
}

#[test]
fn repeated_selection_is_identical() {
    let products = abc();

    let first = select(&products, dollars(300).to_minor_units());
    let second = select(&products, dollars(300).to_minor_units());

    assert_eq!(first, second);
}

#[test]
fn selection_does_not_modify_the_catalog() -> TestResult {
    let catalog = Catalog::with_products(abc(), USD)?;

    let _result = catalog.best_combination(&dollars(250))?;

    assert_eq!(catalog.products(), abc().as_slice());

    Ok(())
}
