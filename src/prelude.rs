//! Storefront prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartError, CartLine},
    catalog::{Catalog, CatalogError},
    pricing::{TotalPriceError, total_price},
    products::{Product, ProductId},
    quote::{Quote, QuoteError},
    solvers::{
        Selector, SelectorResult,
        bounded::BoundedSelector,
        exhaustive::ExhaustiveSelector,
        observer::{NoopObserver, SearchObserver, SearchStats},
        select,
    },
};
