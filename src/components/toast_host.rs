//! Renders the transient notification list and schedules auto-dismiss.

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastKind, Toasts};

/// How long a toast stays up before dismissing itself.
#[cfg(feature = "csr")]
const AUTO_DISMISS_MS: u32 = 2_500;

/// Fixed-position container for active toasts.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<Toasts>();

    view! {
        <div class="toast-host">
            <For
                each=move || toasts.entries()
                key=|toast| toast.id
                children=move |toast: Toast| view! { <ToastCard toast=toast/> }
            />
        </div>
    }
}

#[component]
fn ToastCard(toast: Toast) -> impl IntoView {
    let toasts = expect_context::<Toasts>();
    let id = toast.id;

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(AUTO_DISMISS_MS).await;
        toasts.dismiss(id);
    });

    let class = match toast.kind {
        ToastKind::Success => "toast toast--success",
        ToastKind::Error => "toast toast--error",
    };

    view! {
        <div class=class role="status">
            <span class="toast__message">{toast.message.clone()}</span>
            <button class="toast__close" on:click=move |_| toasts.dismiss(id)>
                "\u{d7}"
            </button>
        </div>
    }
}
