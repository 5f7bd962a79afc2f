//! Filter state store.

use crate::config::TAG_SEPARATOR;
use crate::filter::PricingTag;
use crate::models::PricingOption;

// =============================================================================
// PricingFilter
// =============================================================================

/// Ordered set of selected pricing tags.
///
/// Insertion order is kept so the URL reflects the order the user clicked;
/// it carries no meaning for filtering. Every tag appears at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PricingFilter {
    tags: Vec<PricingTag>,
}

impl PricingFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a `pricing` parameter value.
    ///
    /// Unrecognized tokens are dropped, repeats keep their first position.
    pub fn from_param(value: &str) -> Self {
        let mut filter = Self::new();
        for tag in value.split(TAG_SEPARATOR).filter_map(PricingTag::parse) {
            filter.insert(tag);
        }
        filter
    }

    /// Tags joined for the `pricing` parameter, or `None` when empty.
    pub fn to_param(&self) -> Option<String> {
        if self.tags.is_empty() {
            return None;
        }
        let tokens: Vec<&str> = self.tags.iter().map(|t| t.as_str()).collect();
        let separator = TAG_SEPARATOR.to_string();
        Some(tokens.join(separator.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn contains(&self, tag: PricingTag) -> bool {
        self.tags.contains(&tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = PricingTag> + '_ {
        self.tags.iter().copied()
    }

    /// Whether a product with `option` passes this filter.
    ///
    /// An empty filter admits everything; otherwise any selected tag may match.
    pub fn admits(&self, option: PricingOption) -> bool {
        self.is_empty() || self.tags.iter().any(|t| t.pricing_option() == option)
    }

    /// Same tags regardless of order.
    pub fn same_tags(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|t| other.contains(t))
    }

    fn insert(&mut self, tag: PricingTag) {
        if !self.contains(tag) {
            self.tags.push(tag);
        }
    }

    fn toggle(&mut self, tag: PricingTag) {
        if self.contains(tag) {
            self.tags.retain(|t| *t != tag);
        } else {
            self.tags.push(tag);
        }
    }

    fn clear(&mut self) {
        self.tags.clear();
    }
}

impl FromIterator<PricingTag> for PricingFilter {
    fn from_iter<I: IntoIterator<Item = PricingTag>>(iter: I) -> Self {
        let mut filter = Self::new();
        for tag in iter {
            filter.insert(tag);
        }
        filter
    }
}

// =============================================================================
// FilterState
// =============================================================================

/// Current search and pricing intent.
///
/// Fields are only changed through [`set_search_term`](Self::set_search_term),
/// [`toggle_tag`](Self::toggle_tag) and [`reset_tags`](Self::reset_tags).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    search_term: String,
    pricing_filter: PricingFilter,
}

impl FilterState {
    pub fn new(search_term: impl Into<String>, pricing_filter: PricingFilter) -> Self {
        Self {
            search_term: search_term.into(),
            pricing_filter,
        }
    }

    /// Search term exactly as typed.
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn pricing_filter(&self) -> &PricingFilter {
        &self.pricing_filter
    }

    /// No search text and no tags.
    pub fn is_default(&self) -> bool {
        self.search_term.is_empty() && self.pricing_filter.is_empty()
    }

    /// Replace the search term verbatim. Trimming happens at query time.
    pub fn set_search_term(&mut self, text: impl Into<String>) {
        self.search_term = text.into();
    }

    /// Deselect `tag` if selected, select it otherwise.
    pub fn toggle_tag(&mut self, tag: PricingTag) {
        self.pricing_filter.toggle(tag);
    }

    /// [`toggle_tag`](Self::toggle_tag) for a raw token. Unrecognized tokens are ignored.
    pub fn toggle_tag_str(&mut self, token: &str) {
        if let Some(tag) = PricingTag::parse(token) {
            self.toggle_tag(tag);
        }
    }

    /// Clear all selected tags, keeping the search term.
    pub fn reset_tags(&mut self) {
        self.pricing_filter.clear();
    }
}
