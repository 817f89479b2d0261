//! Integration tests driven by the bundled fixture sets

use rusty_money::{Money, iso::USD};
use testresult::TestResult;

use storefront::{
    fixtures::Fixture,
    products::ProductId,
    quote::Quote,
    solvers::{
        Selector, bounded::BoundedSelector, exhaustive::ExhaustiveSelector, observer::SearchStats,
    },
};

#[test]
fn storefront_cart_lines_and_subtotal() -> TestResult {
    let fixture = Fixture::from_set("storefront")?;
    let catalog = fixture.catalog()?;

    let lines: Vec<(ProductId, u32)> = fixture
        .cart()
        .lines(&catalog)
        .iter()
        .map(|line| (line.product.id, line.quantity))
        .collect();

    assert_eq!(
        lines,
        vec![(ProductId(1), 1), (ProductId(4), 2), (ProductId(6), 1)]
    );
    assert_eq!(
        fixture.cart().subtotal(&catalog)?,
        Money::from_minor(22_550, USD)
    );

    Ok(())
}

#[test]
fn storefront_best_combination_for_250() -> TestResult {
    let fixture = Fixture::from_set("storefront")?;
    let catalog = fixture.catalog()?;
    let budget = Money::from_major(250, USD);

    let result = catalog.best_combination(&budget)?;
    let ids: Vec<ProductId> = result.iter().map(|product| product.id).collect();

    assert_eq!(ids, vec![ProductId(1), ProductId(2)]);

    let quote = Quote::from_selection(&catalog, budget, result);

    assert_eq!(quote.total(), budget);
    assert_eq!(quote.remaining()?, Money::from_minor(0, USD));

    Ok(())
}

#[test]
fn ties_fixture_prefers_the_earlier_product() -> TestResult {
    let fixture = Fixture::from_set("ties")?;
    let catalog = fixture.catalog()?;

    let result = catalog.best_combination_bounded(&Money::from_major(130, USD))?;
    let names: Vec<&str> = result.iter().map(|product| product.name.as_str()).collect();

    assert_eq!(names, vec!["A", "C"]);
    assert!(fixture.cart().is_empty());

    Ok(())
}

#[test]
fn bounded_search_visits_fewer_candidates_on_the_storefront() -> TestResult {
    let fixture = Fixture::from_set("storefront")?;
    let catalog = fixture.catalog()?;
    let budget = Money::from_major(300, USD).to_minor_units();

    let mut bounded = SearchStats::default();
    let mut exhaustive = SearchStats::default();

    let pruned = BoundedSelector::select_with_observer(catalog.products(), budget, &mut bounded);
    let full = ExhaustiveSelector::select_with_observer(catalog.products(), budget, &mut exhaustive);

    assert_eq!(pruned, full);
    assert!(
        bounded.candidates < exhaustive.candidates,
        "bounded {bounded:?} vs exhaustive {exhaustive:?}"
    );

    Ok(())
}
