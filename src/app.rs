//! Root application module.
//!
//! Contains the main App component, the AppContext definition, and the
//! product loading and URL mirroring wiring.

use std::sync::{Arc, Mutex, PoisonError};

use catalog_core::codec;
use catalog_core::config::DEFAULT_BASE_PATH;
use catalog_core::{Catalog, FilterState, LoadState, PricingTag, Product, VisibleCache};
use leptos::prelude::*;
use tracing::warn;
use wasm_bindgen_futures::spawn_local;

use crate::components::{CatalogHeader, ErrorPanel, Loading, NoResults, ProductGrid, SearchBar};
use crate::config::PRODUCTS_URL;
use crate::utils::{BrowserLocation, HttpProductSource};

stylance::import_crate_style!(css, "src/app.module.css");

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed from children with
/// `use_context::<AppContext>()`. Components read the signals directly but
/// mutate filter state only through the methods below.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals, which are
/// cheap to copy (they're just pointers to the underlying reactive state).
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current search and pricing filter.
    pub filters: RwSignal<FilterState>,
    /// Fetched product list and its load state.
    pub catalog: RwSignal<Catalog>,
    /// Products passing the current filters.
    pub visible: Memo<Arc<[Product]>>,
}

impl AppContext {
    /// Creates a context around `initial` filters and a catalog awaiting its
    /// first load.
    pub fn new(initial: FilterState) -> Self {
        let filters = RwSignal::new(initial);
        let catalog = RwSignal::new(Catalog::new());

        // The memo re-runs on every catalog notification, including load state
        // changes that keep the same list; the cache absorbs those.
        let cache = Arc::new(Mutex::new(VisibleCache::new()));
        let visible = Memo::new(move |_| {
            let products = catalog.with(|c| Arc::clone(c.products()));
            let mut cache = cache.lock().unwrap_or_else(PoisonError::into_inner);
            filters.with(|f| cache.get(&products, f))
        });

        Self {
            filters,
            catalog,
            visible,
        }
    }

    pub fn set_search_term(&self, text: String) {
        self.filters.update(|f| f.set_search_term(text));
    }

    pub fn toggle_tag(&self, tag: PricingTag) {
        self.filters.update(|f| f.toggle_tag(tag));
    }

    pub fn reset_tags(&self) {
        self.filters.update(|f| f.reset_tags());
    }

    /// Fetch the product list again.
    pub fn retry(&self) {
        load_products(*self);
    }
}

/// Start a product fetch. The completed fetch replaces whatever the catalog
/// held, so overlapping retries resolve to the last response.
pub fn load_products(ctx: AppContext) {
    ctx.catalog.update(|c| c.begin_load());

    spawn_local(async move {
        let source = HttpProductSource::new(PRODUCTS_URL);
        let result = Catalog::load(&source).await;
        ctx.catalog.update(|c| c.finish_load(result));
    });
}

/// Mirror every filter change into the page URL without navigating.
fn sync_filters_to_location(ctx: AppContext) {
    Effect::new(move |_| {
        ctx.filters.with(|filters| {
            if let Err(e) = codec::write_to_location(filters, DEFAULT_BASE_PATH, &BrowserLocation) {
                warn!(error = %e, "failed to mirror filters to location");
            }
        });
    });
}

// ============================================================================
// Components
// ============================================================================

/// Root application component.
///
/// This component:
/// - Restores filters from the URL and provides the global AppContext
/// - Keeps the URL in sync with later filter edits
/// - Starts the initial product fetch
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new(codec::read_from_location(&BrowserLocation));
    provide_context(ctx);

    sync_filters_to_location(ctx);
    load_products(ctx);

    // Only the load state decides which screen is shown, so filter edits never
    // rebuild the page (and the search input keeps focus).
    let status = Memo::new(move |_| ctx.catalog.with(|c| c.state().clone()));

    view! {
        {move || match status.get() {
            LoadState::Loading => view! { <Loading /> }.into_any(),
            LoadState::Failed(message) => {
                let on_retry = Callback::new(move |_: ()| ctx.retry());
                view! { <ErrorPanel message=message on_retry=on_retry /> }.into_any()
            }
            LoadState::Ready => view! { <CatalogPage /> }.into_any(),
        }}
    }
}

/// Header, search controls and results.
#[component]
fn CatalogPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let show_no_results = Signal::derive(move || {
        let searching = ctx.filters.with(|f| !f.search_term().is_empty());
        searching && ctx.visible.with(|v| v.is_empty())
    });

    view! {
        <div class=css::app>
            <CatalogHeader />
            <SearchBar />
            <main class=css::main>
                <Show when=move || show_no_results.get() fallback=|| view! { <ProductGrid /> }>
                    <NoResults />
                </Show>
            </main>
        </div>
    }
}
