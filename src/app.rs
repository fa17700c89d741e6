//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{ParentRoute, Redirect, Route, Router, Routes},
    hooks::use_location,
};

use crate::components::layout::ProtectedLayout;
use crate::components::toast_host::ToastHost;
use crate::pages::{
    edit_member::EditMemberPage,
    home::HomePage,
    login::LoginPage,
    members::{ApprovedMembersPage, PendingMembersPage},
    view_member::ViewMemberPage,
};
use crate::state::session::Session;
use crate::state::toast::Toasts;

/// Root application component.
///
/// Provides the session and toast handles and sets up client-side
/// routing. `/login` is the only public route; everything else sits
/// behind the session gate.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = Session::new();
    let toasts = Toasts::new();
    provide_context(session);
    provide_context(toasts);

    view! {
        <Stylesheet id="leptos" href="/pkg/enroll-admin.css"/>
        <Title text="Enrollment Admin"/>

        <Router>
            <SessionGate/>
            <Routes fallback=|| view! { <Redirect path="/login"/> }>
                <Route path=StaticSegment("login") view=LoginPage/>
                <ParentRoute path=StaticSegment("") view=ProtectedLayout>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("approved"))
                        view=ApprovedMembersPage
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("pending"))
                        view=PendingMembersPage
                    />
                    <Route
                        path=(
                            StaticSegment("admin"),
                            StaticSegment("members"),
                            StaticSegment("view"),
                            ParamSegment("id"),
                        )
                        view=ViewMemberPage
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("edit"), ParamSegment("id"))
                        view=EditMemberPage
                    />
                </ParentRoute>
            </Routes>
        </Router>

        <ToastHost/>
    }
}

/// Drives the session gate from navigation: every change of the current
/// path is fed to the gate, which decides whether a verification request
/// is needed. Renders nothing.
#[component]
fn SessionGate() -> impl IntoView {
    let session = expect_context::<Session>();
    let location = use_location();

    Effect::new(move || {
        let path = location.pathname.get();
        session.navigated_to(&path);
    });
}
