//! End-to-end URL mirroring: load filters from a link, edit them, write back.

use std::sync::Arc;

use catalog_core::codec::{self, read_from_location, write_to_location};
use catalog_core::config::DEFAULT_BASE_PATH;
use catalog_core::{
    FilterState, MemoryLocation, PricingOption, PricingTag, Product, ProductId, VisibleCache,
};

fn product(id: u64, title: &str, creator: &str, option: PricingOption) -> Product {
    Product {
        id: ProductId::Number(id),
        title: title.to_string(),
        creator: creator.to_string(),
        price: if option == PricingOption::BuyNow { 12.0 } else { 0.0 },
        pricing_option: option,
        image_path: format!("/img/{}.jpg", id),
    }
}

#[test]
fn test_shared_link_then_reset_tags() {
    let location = MemoryLocation::new("/?search=test&pricing=paid,view-only");

    let mut filters = read_from_location(&location);
    assert_eq!(filters.search_term(), "test");
    assert_eq!(
        filters.pricing_filter().iter().collect::<Vec<_>>(),
        vec![PricingTag::Paid, PricingTag::ViewOnly]
    );

    filters.reset_tags();
    write_to_location(&filters, DEFAULT_BASE_PATH, &location).unwrap();
    assert_eq!(location.url(), "/?search=test");
    assert_eq!(location.replacements(), 1);
}

#[test]
fn test_every_edit_is_mirrored_in_place() {
    let location = MemoryLocation::new("/");
    let mut filters = read_from_location(&location);

    filters.set_search_term("robot");
    write_to_location(&filters, DEFAULT_BASE_PATH, &location).unwrap();
    assert_eq!(location.url(), "/?search=robot");

    filters.toggle_tag(PricingTag::Free);
    write_to_location(&filters, DEFAULT_BASE_PATH, &location).unwrap();
    assert_eq!(location.url(), "/?search=robot&pricing=free");

    filters.set_search_term("   ");
    filters.toggle_tag(PricingTag::Free);
    write_to_location(&filters, DEFAULT_BASE_PATH, &location).unwrap();
    assert_eq!(location.url(), "/");

    assert_eq!(location.replacements(), 3);
}

#[test]
fn test_reopened_link_filters_the_same_products() {
    let products: Arc<[Product]> = vec![
        product(1, "Space Robot", "Alice", PricingOption::BuyNow),
        product(2, "Garden Robot", "Bob", PricingOption::Free),
        product(3, "Ocean", "Robotics Lab", PricingOption::ViewOnly),
        product(4, "Forest", "Carol", PricingOption::Free),
    ]
    .into();

    let mut original = FilterState::default();
    original.set_search_term("  ROBOT ");
    original.toggle_tag(PricingTag::ViewOnly);
    original.toggle_tag(PricingTag::Free);

    let shared = MemoryLocation::new(codec::location_url(&original, DEFAULT_BASE_PATH));
    let reopened = read_from_location(&shared);

    let mut cache = VisibleCache::new();
    let before: Vec<_> = cache.get(&products, &original).iter().map(|p| p.id.clone()).collect();
    let after: Vec<_> = cache.get(&products, &reopened).iter().map(|p| p.id.clone()).collect();

    assert_eq!(before, vec![ProductId::Number(2), ProductId::Number(3)]);
    assert_eq!(before, after);
}

#[test]
fn test_forward_incompatible_link_keeps_known_parts() {
    let location = MemoryLocation::new("/?search=lamp&pricing=free,auction&sort=price");
    let filters = read_from_location(&location);

    assert_eq!(filters.search_term(), "lamp");
    assert_eq!(
        filters.pricing_filter().iter().collect::<Vec<_>>(),
        vec![PricingTag::Free]
    );

    write_to_location(&filters, DEFAULT_BASE_PATH, &location).unwrap();
    assert_eq!(location.url(), "/?search=lamp&pricing=free");
}
