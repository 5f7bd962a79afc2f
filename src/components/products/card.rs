use catalog_core::{PricingOption, Product};
use leptos::prelude::*;

use super::css;
use crate::utils::format::{format_price, pricing_label};

/// Badge class for options that show a label instead of a price.
fn badge_class(option: PricingOption) -> String {
    let variant = match option {
        PricingOption::Free => css::badgeFree,
        PricingOption::ViewOnly | PricingOption::BuyNow => css::badgeViewOnly,
    };
    format!("{} {}", css::badge, variant)
}

/// A single product: image, title, price or pricing badge, creator.
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let Product {
        title,
        creator,
        price,
        pricing_option,
        image_path,
        ..
    } = product;

    let pricing = match pricing_option {
        PricingOption::BuyNow => view! {
            <div class=css::price>{format_price(price)}</div>
        }
        .into_any(),
        option => view! {
            <div class=badge_class(option)>{pricing_label(option)}</div>
        }
        .into_any(),
    };

    view! {
        <article class=css::card>
            <div class=css::imageContainer>
                <img src=image_path alt=title.clone() class=css::image loading="lazy" />
            </div>
            <div class=css::info>
                <h3 class=css::title>{title}</h3>
                {pricing}
                <p class=css::creator>{creator}</p>
            </div>
        </article>
    }
}
