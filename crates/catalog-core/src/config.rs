//! Core configuration constants.

// =============================================================================
// Query Parameters
// =============================================================================

/// Query parameter holding the trimmed search term.
pub const SEARCH_PARAM: &str = "search";

/// Query parameter holding the selected pricing tags.
pub const PRICING_PARAM: &str = "pricing";

/// Separator between tags inside the `pricing` parameter.
pub const TAG_SEPARATOR: char = ',';

// =============================================================================
// Location
// =============================================================================

/// Path the page URL is rewritten onto when mirroring filter state.
pub const DEFAULT_BASE_PATH: &str = "/";
