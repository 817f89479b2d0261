//! Storefront
//!
//! A product catalog, an in-memory cart, and a selector that finds the most expensive
//! combination of catalog products that still fits within a spending limit.

pub mod cart;
pub mod catalog;
pub mod fixtures;
pub mod prelude;
pub mod pricing;
pub mod products;
pub mod quote;
pub mod solvers;
pub mod utils;
