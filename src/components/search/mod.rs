//! Search and pricing filter controls.
//!
//! The input and checkboxes only call [`AppContext`] mutations; their displayed
//! state is read back from the filter signal, so a URL-restored filter shows up
//! checked on first render.

use catalog_core::PricingTag;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::SEARCH_PLACEHOLDER;
use crate::utils::format::results_count;

stylance::import_crate_style!(css, "src/components/search/search.module.css");

#[component]
pub fn SearchBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let search_term = Signal::derive(move || ctx.filters.with(|f| f.search_term().to_string()));
    let has_tags = Signal::derive(move || ctx.filters.with(|f| !f.pricing_filter().is_empty()));
    let count_text = Signal::derive(move || results_count(ctx.visible.with(|v| v.len())));

    view! {
        <section class=css::search>
            <div class=css::inputContainer>
                <input
                    type="text"
                    class=css::input
                    placeholder=SEARCH_PLACEHOLDER
                    prop:value=search_term
                    on:input=move |ev| ctx.set_search_term(event_target_value(&ev))
                />
                <span class=css::icon>
                    <Icon icon=ic::SEARCH />
                </span>
            </div>

            <div class=css::filterContainer>
                <span class=css::filterTitle>"Pricing Option"</span>
                {PricingTag::ALL
                    .into_iter()
                    .map(|tag| view! { <PricingCheckbox tag=tag /> })
                    .collect_view()}
                <Show when=move || has_tags.get()>
                    <button class=css::resetButton on:click=move |_| ctx.reset_tags()>
                        <Icon icon=ic::CLOSE />
                        "Reset"
                    </button>
                </Show>
            </div>

            <p class=css::resultsCount>{count_text}</p>
        </section>
    }
}

#[component]
fn PricingCheckbox(tag: PricingTag) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let checked = Signal::derive(move || ctx.filters.with(|f| f.pricing_filter().contains(tag)));

    view! {
        <label class=css::filterLabel>
            <input
                type="checkbox"
                class=css::checkbox
                prop:checked=checked
                on:change=move |_| ctx.toggle_tag(tag)
            />
            <span class=css::filterText>{tag.label()}</span>
        </label>
    }
}
