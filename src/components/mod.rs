//! UI components built with Leptos.
//!
//! - [`header`] - Page title bar
//! - [`search`] - Search input, pricing checkboxes and result count
//! - [`products`] - Product grid and cards
//! - [`feedback`] - Loading, error and empty-result screens
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod feedback;
pub mod header;
pub mod icons;
pub mod products;
pub mod search;

pub use feedback::{ErrorPanel, Loading, NoResults};
pub use header::CatalogHeader;
pub use products::ProductGrid;
pub use search::SearchBar;
