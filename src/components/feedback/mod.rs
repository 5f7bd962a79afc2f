//! Loading, error and empty-result screens.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/feedback/feedback.module.css");

#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class=css::loading role="status">
            <div class=css::spinner></div>
            <p class=css::loadingText>"Loading products..."</p>
        </div>
    }
}

/// Fetch failure with a manual retry. There is no automatic retry.
#[component]
pub fn ErrorPanel(message: String, on_retry: Callback<()>) -> impl IntoView {
    view! {
        <div class=css::error role="alert">
            <h2 class=css::errorTitle>"Oops! Something went wrong"</h2>
            <p class=css::errorMessage>{message}</p>
            <button class=css::retryButton on:click=move |_| on_retry.run(())>
                <Icon icon=ic::RETRY />
                "Try Again"
            </button>
        </div>
    }
}

#[component]
pub fn NoResults() -> impl IntoView {
    view! {
        <div class=css::noResults>
            <h3 class=css::noResultsTitle>"No items match your search"</h3>
            <p class=css::noResultsMessage>"Try different keywords or check spelling"</p>
        </div>
    }
}
