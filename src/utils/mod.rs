//! Browser and formatting utilities.
//!
//! Provides:
//! - [`BrowserLocation`] - `window.location` / `history` behind the core's location traits
//! - [`HttpProductSource`] - product feed over the Fetch API with timeout
//! - [`format`] - price and pricing-option display helpers

pub mod dom;
mod fetch;
pub mod format;

pub use dom::BrowserLocation;
pub use fetch::HttpProductSource;
