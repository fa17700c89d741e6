//! Protected dashboard shell: phase-gated rendering, sidebar navigation,
//! and the logout action.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::{Outlet, Redirect};
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::loader::Loader;
use crate::state::session::{Phase, Session};

const MENU_ITEMS: [(&str, &str); 3] = [
    ("Dashboard", "/"),
    ("Approved Members", "/admin/approved"),
    ("Pending Members", "/admin/pending"),
];

/// Gate wrapper for every protected route. While the session gate is
/// verifying it shows only the loader — no premature redirect and no
/// premature protected content.
#[component]
pub fn ProtectedLayout() -> impl IntoView {
    let session = expect_context::<Session>();

    view! {
        {move || match session.phase() {
            Phase::Unknown | Phase::Verifying => view! { <Loader/> }.into_any(),
            Phase::Unauthenticated => view! { <Redirect path="/login"/> }.into_any(),
            Phase::Authenticated => view! { <DashboardShell/> }.into_any(),
        }}
    }
}

/// Sidebar + content shell rendered once the gate is authenticated.
#[component]
fn DashboardShell() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();
    let location = use_location();
    let sidebar_open = RwSignal::new(false);

    let on_logout = move |_| {
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            session.logout().await;
            navigate(
                "/login",
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        });
    };

    view! {
        <div class="shell">
            <aside class=move || {
                if sidebar_open.get() { "shell__sidebar shell__sidebar--open" } else { "shell__sidebar" }
            }>
                <div class="shell__brand">
                    <h1 class="shell__brand-title">"Enrollment Admin"</h1>
                    <p class="shell__brand-subtitle">"Membership workflow"</p>
                    <button
                        class="shell__sidebar-close"
                        on:click=move |_| sidebar_open.set(false)
                    >
                        "\u{d7}"
                    </button>
                </div>

                <nav class="shell__nav">
                    {MENU_ITEMS
                        .into_iter()
                        .map(|(label, path)| {
                            let location = location.clone();
                            let class = move || {
                                if location.pathname.get() == path {
                                    "shell__nav-link shell__nav-link--active"
                                } else {
                                    "shell__nav-link"
                                }
                            };
                            view! {
                                <a href=path class=class on:click=move |_| sidebar_open.set(false)>
                                    {label}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </nav>

                <button class="shell__logout" on:click=on_logout>
                    "Logout"
                </button>
            </aside>

            <div class="shell__main">
                <header class="shell__topbar">
                    <button
                        class="shell__menu-toggle"
                        on:click=move |_| sidebar_open.set(true)
                    >
                        "\u{2630}"
                    </button>
                </header>
                <main class="shell__content">
                    <Outlet/>
                </main>
            </div>
        </div>
    }
}
