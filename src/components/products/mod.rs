//! Product grid and cards.

mod card;
mod grid;

pub use card::ProductCard;
pub use grid::ProductGrid;

stylance::import_crate_style!(css, "src/components/products/products.module.css");
