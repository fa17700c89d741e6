//! Dashboard home: enrollment counts and a distribution view.
//!
//! The stats fetch lives in a `LocalResource`, so navigating away while
//! it is outstanding just drops the future — a dropped fetch is not an
//! error.

use leptos::prelude::*;

use crate::components::stat_card::StatCard;
use crate::net::api;
use crate::net::types::EnrollmentStats;
use crate::state::toast::Toasts;

#[component]
pub fn HomePage() -> impl IntoView {
    let toasts = expect_context::<Toasts>();
    let stats = LocalResource::new(|| api::fetch_stats());

    // One toast per failed fetch; the cards below fall back to zeros.
    Effect::new(move || {
        if let Some(Err(err)) = stats.get() {
            log::warn!("stats fetch failed: {err}");
            toasts.error("Failed to fetch stats");
        }
    });

    view! {
        <div class="home-page">
            <div>
                <h1 class="page-title">"Dashboard Overview"</h1>
                <p class="page-subtitle">"Enrollment statistics & insights"</p>
            </div>

            <Suspense fallback=move || view! { <p>"Loading statistics..."</p> }>
                {move || {
                    stats
                        .get()
                        .map(|result| {
                            let s = result.unwrap_or_default();
                            view! {
                                <div class="home-page__cards">
                                    <StatCard title="Total Enrollments" value=s.total() accent="total"/>
                                    <StatCard title="Pending" value=s.pending accent="pending"/>
                                    <StatCard title="Approved" value=s.approved accent="approved"/>
                                    <StatCard title="Canceled" value=s.canceled accent="canceled"/>
                                </div>
                                <DistributionBars stats=s/>
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

/// Plain CSS bar rendering of the status distribution.
#[component]
fn DistributionBars(stats: EnrollmentStats) -> impl IntoView {
    let rows = [
        ("Pending", stats.pending, "pending"),
        ("Approved", stats.approved, "approved"),
        ("Canceled", stats.canceled, "canceled"),
    ];
    let max = rows.iter().map(|(_, v, _)| *v).max().unwrap_or(0).max(1);

    view! {
        <div class="distribution">
            <h2 class="distribution__title">"Enrollment Distribution"</h2>
            {rows
                .into_iter()
                .map(|(label, value, accent)| {
                    let width = format!("{}%", value * 100 / max);
                    let class = format!("distribution__bar distribution__bar--{accent}");
                    view! {
                        <div class="distribution__row">
                            <span class="distribution__label">{label}</span>
                            <div class="distribution__track">
                                <div class=class style:width=width></div>
                            </div>
                            <span class="distribution__value">{value}</span>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
