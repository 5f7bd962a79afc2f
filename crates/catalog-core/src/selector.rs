//! Derived view over the product list.

use std::sync::Arc;

use crate::filter::{FilterState, PricingFilter};
use crate::models::Product;

/// Products passing both the search and the pricing filter, in input order.
///
/// The search matches when the lowercased `title` or `creator` contains the
/// lowercased, trimmed term; a blank term matches everything. The pricing
/// filter admits everything when empty, otherwise any selected tag.
pub fn visible(
    products: &[Product],
    search_term: &str,
    pricing_filter: &PricingFilter,
) -> Vec<Product> {
    let needle = search_term.trim().to_lowercase();

    products
        .iter()
        .filter(|p| matches_search(p, &needle))
        .filter(|p| pricing_filter.admits(p.pricing_option))
        .cloned()
        .collect()
}

/// `needle` must already be trimmed and lowercased.
fn matches_search(product: &Product, needle: &str) -> bool {
    needle.is_empty()
        || product.title.to_lowercase().contains(needle)
        || product.creator.to_lowercase().contains(needle)
}

// =============================================================================
// Memoization
// =============================================================================

#[derive(Debug, Clone)]
struct CacheKey {
    products: Arc<[Product]>,
    search_term: String,
    pricing_filter: PricingFilter,
}

impl CacheKey {
    fn matches(&self, products: &Arc<[Product]>, state: &FilterState) -> bool {
        Arc::ptr_eq(&self.products, products)
            && self.search_term == state.search_term()
            && self.pricing_filter == *state.pricing_filter()
    }
}

/// Single-entry cache for [`visible`].
///
/// The product list is compared by identity (a reloaded list is a new `Arc`),
/// the filter state by value.
#[derive(Debug, Clone, Default)]
pub struct VisibleCache {
    entry: Option<(CacheKey, Arc<[Product]>)>,
}

impl VisibleCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Visible products for `products` under `state`, recomputed only when an
    /// input changed since the previous call.
    pub fn get(&mut self, products: &Arc<[Product]>, state: &FilterState) -> Arc<[Product]> {
        if let Some((key, value)) = &self.entry
            && key.matches(products, state)
        {
            return Arc::clone(value);
        }

        let value: Arc<[Product]> =
            visible(products, state.search_term(), state.pricing_filter()).into();
        let key = CacheKey {
            products: Arc::clone(products),
            search_term: state.search_term().to_string(),
            pricing_filter: state.pricing_filter().clone(),
        };
        self.entry = Some((key, Arc::clone(&value)));
        value
    }

    /// Drop the cached entry.
    pub fn clear(&mut self) {
        self.entry = None;
    }
}
