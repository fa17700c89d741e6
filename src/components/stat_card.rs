//! Dashboard stat card: an accent block with a label and a count.

use leptos::prelude::*;

#[component]
pub fn StatCard(
    title: &'static str,
    value: u64,
    /// Modifier class picking the accent color.
    accent: &'static str,
) -> impl IntoView {
    let class = format!("stat-card stat-card--{accent}");
    view! {
        <div class=class>
            <p class="stat-card__title">{title}</p>
            <h3 class="stat-card__value">{value}</h3>
        </div>
    }
}
