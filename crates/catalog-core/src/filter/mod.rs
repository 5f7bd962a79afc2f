//! Filter state and its transitions.
//!
//! - [`PricingTag`] - user/URL-facing pricing tags and their mapping onto [`PricingOption`]
//! - [`PricingFilter`] - ordered set of selected tags
//! - [`FilterState`] - search term plus pricing filter
//!
//! [`PricingOption`]: crate::models::PricingOption

mod state;
mod tag;

pub use state::{FilterState, PricingFilter};
pub use tag::PricingTag;
