//! Neutral loading indicator shown while the session gate verifies or a
//! resource is in flight.

use leptos::prelude::*;

#[component]
pub fn Loader() -> impl IntoView {
    view! {
        <div class="loader">
            <div class="loader__spinner" aria-hidden="true"></div>
            <p class="loader__label">"Loading..."</p>
        </div>
    }
}
