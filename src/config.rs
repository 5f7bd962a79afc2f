//! Application configuration.
//!
//! Centralizes the constants used by the web front end. URL parameter names
//! and the base path live in [`catalog_core::config`].

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name shown in the header.
pub const APP_NAME: &str = "Store";

/// Header tagline.
pub const APP_TAGLINE: &str = "Browse, search and filter the catalog";

// =============================================================================
// Network Configuration
// =============================================================================

/// Product feed endpoint (JSON array of products).
pub const PRODUCTS_URL: &str = "/products.json";

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

// =============================================================================
// UI Text
// =============================================================================

/// Placeholder of the search input.
pub const SEARCH_PLACEHOLDER: &str = "Find the Items you're looking for";

/// Currency symbol prefixed to prices.
pub const CURRENCY_SYMBOL: &str = "$";

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
