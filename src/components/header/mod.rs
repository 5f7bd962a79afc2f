//! Page header.

use leptos::prelude::*;

use crate::config::{APP_NAME, APP_TAGLINE};

stylance::import_crate_style!(css, "src/components/header/header.module.css");

#[component]
pub fn CatalogHeader() -> impl IntoView {
    view! {
        <header class=css::header>
            <h1 class=css::title>{APP_NAME}</h1>
            <p class=css::tagline>{APP_TAGLINE}</p>
        </header>
    }
}
