//! Item Fixtures

use serde::Deserialize;

use crate::products::ProductId;

/// Wrapper for cart items in YAML
#[derive(Debug, Deserialize)]
pub struct ItemsFixture {
    /// Product ids; each occurrence adds one unit to the cart
    pub items: Vec<ProductId>,
}
