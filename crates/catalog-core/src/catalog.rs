//! Product list load state.
//!
//! The list is fetched once at startup and again on each explicit retry.
//! Retries are not deduplicated: every completed fetch replaces the previous
//! outcome, so the last response to arrive wins.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::FetchError;
use crate::models::Product;

/// Source of the product list.
#[allow(async_fn_in_trait)]
pub trait ProductSource {
    async fn fetch_products(&self) -> Result<Vec<Product>, FetchError>;
}

/// Outcome of the most recent fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// A fetch is in flight.
    Loading,
    /// The list was loaded.
    Ready,
    /// The last fetch failed with this message.
    Failed(String),
}

/// The loaded product list together with its load state.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Arc<[Product]>,
    state: LoadState,
}

impl Catalog {
    /// A catalog awaiting its first load.
    pub fn new() -> Self {
        Self {
            products: Arc::from(Vec::new()),
            state: LoadState::Loading,
        }
    }

    /// A catalog that already holds `products`.
    pub fn ready(products: Vec<Product>) -> Self {
        Self {
            products: products.into(),
            state: LoadState::Ready,
        }
    }

    /// Fetch from `source` and return the outcome for [`finish_load`](Self::finish_load).
    pub async fn load<S: ProductSource>(source: &S) -> Result<Vec<Product>, FetchError> {
        source.fetch_products().await
    }

    pub fn products(&self) -> &Arc<[Product]> {
        &self.products
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Loading
    }

    /// Message of the last failed fetch.
    pub fn error(&self) -> Option<&str> {
        match &self.state {
            LoadState::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    /// Mark a fetch as started. Clears any previous error; the current list
    /// stays until the fetch completes.
    pub fn begin_load(&mut self) {
        self.state = LoadState::Loading;
    }

    /// Apply a completed fetch, replacing the previous outcome.
    pub fn finish_load(&mut self, result: Result<Vec<Product>, FetchError>) {
        match result {
            Ok(products) => {
                debug!(count = products.len(), "product list loaded");
                self.products = products.into();
                self.state = LoadState::Ready;
            }
            Err(e) => {
                warn!(error = %e, "product list fetch failed");
                self.products = Arc::from(Vec::new());
                self.state = LoadState::Failed(e.to_string());
            }
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
