//! Data models for the catalog.
//!
//! - [`Product`] - a single catalog entry as delivered by the product feed
//! - [`PricingOption`] - how a product is obtained

mod product;

pub use product::{PricingOption, Product, ProductId, UnknownPricingOption};
