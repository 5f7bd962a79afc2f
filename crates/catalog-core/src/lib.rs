//! Catalog browsing core: filter state, URL mirroring, and the derived view.
//!
//! The crate is free of browser dependencies. The web front end supplies the
//! collaborators it needs:
//! - [`ProductSource`] - fetches the product list
//! - [`LocationReader`], [`LocationWriter`] - read and replace the page URL
//!
//! Everything else is plain data and pure functions:
//! - [`FilterState`] with its three transitions
//! - [`codec`] - `FilterState` <-> query string
//! - [`visible`] and [`VisibleCache`] - the filtered product list
//! - [`Catalog`] - load state of the fetched product list

pub mod catalog;
pub mod codec;
pub mod config;
pub mod error;
pub mod filter;
pub mod models;
pub mod selector;

pub use catalog::{Catalog, LoadState, ProductSource};
pub use codec::{LocationReader, LocationWriter, MemoryLocation, QueryParams};
pub use error::{CodecError, FetchError};
pub use filter::{FilterState, PricingFilter, PricingTag};
pub use models::{PricingOption, Product, ProductId};
pub use selector::{VisibleCache, visible};
