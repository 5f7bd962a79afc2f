use leptos::prelude::*;

use super::{ProductCard, css};
use crate::app::AppContext;

/// Grid of the currently visible products, keyed by product id.
#[component]
pub fn ProductGrid() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    view! {
        <div class=css::grid>
            <For
                each=move || ctx.visible.get().to_vec()
                key=|product| product.id.clone()
                children=move |product| {
                    view! { <ProductCard product=product /> }
                }
            />
        </div>
    }
}
