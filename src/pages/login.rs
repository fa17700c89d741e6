//! Login page: credential form posting to the session endpoint.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::error::ApiError;
use crate::net::types::Credentials;
use crate::state::session::Session;
use crate::state::toast::Toasts;

/// Email/password form. Submission is guarded while a login is in
/// flight; a success toast precedes the redirect to the dashboard, and
/// failures surface the propagated error without any local recovery.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let toasts = expect_context::<Toasts>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        submitting.set(true);

        let credentials = Credentials {
            email: email.get(),
            password: password.get(),
        };
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match session.login(&credentials).await {
                Ok(resp) => {
                    toasts.success(resp.message.unwrap_or_else(|| "Login successful".to_owned()));
                    navigate("/", NavigateOptions::default());
                }
                Err(ApiError::Auth { .. }) => {
                    toasts.error("Incorrect email or password");
                }
                Err(err) => {
                    toasts.error(err.user_message());
                }
            }
            submitting.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <header class="login-card__header">
                    <h2>"Welcome Back"</h2>
                    <p>"Login to continue"</p>
                </header>

                <form on:submit=on_submit>
                    <label class="login-card__field">
                        "Email Address"
                        <input
                            type="email"
                            required
                            autocomplete="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>

                    <label class="login-card__field">
                        "Password"
                        <input
                            type="password"
                            required
                            autocomplete="current-password"
                            placeholder="\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>

                    <button
                        type="submit"
                        class="btn btn--primary login-card__submit"
                        disabled=move || submitting.get()
                    >
                        {move || if submitting.get() { "Logging in..." } else { "Login" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
