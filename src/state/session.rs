//! Session gate: tracks whether the visitor holds a valid session and
//! gates access to protected routes.
//!
//! DESIGN
//! ======
//! `SessionState` is a pure state machine keyed on the current route path.
//! The server is the sole source of truth — `authenticated` here is only a
//! UI hint, refreshed by `GET /verify` once per distinct protected path.
//! `Session` is the single owning handle: every mutation of the underlying
//! signal goes through it, so views only ever read `phase()` and call the
//! operations.
//!
//! Stale-response guard: a verification that settles for a path the visitor
//! has since left must not mark the current path as checked. `settle_verify`
//! compares the settled path against the current path and discards
//! mismatches.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::error::ApiError;
use crate::net::types::{Credentials, LoginResponse};

/// The public entry route. Landing here never triggers verification and
/// always resets the gate.
pub const LOGIN_PATH: &str = "/login";

/// Gate phases. `Unknown` only exists before the first navigation event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Unknown,
    Verifying,
    Authenticated,
    Unauthenticated,
}

/// What the owner must do after a navigation event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GateAction {
    /// Nothing to do; render according to the current phase.
    None,
    /// Issue one verification request for `path`.
    Verify { path: String },
}

/// Pure session-gate state machine.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    phase: Phase,
    current_path: String,
    checked_for_path: Option<String>,
}

impl SessionState {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn checked_for_path(&self) -> Option<&str> {
        self.checked_for_path.as_deref()
    }

    /// The visitor navigated to `path`. Returns the action the owner must
    /// perform. Idempotent for repeated events on the same path.
    pub fn enter_route(&mut self, path: &str) -> GateAction {
        let same_path = self.current_path == path;
        self.current_path = path.to_owned();

        if path == LOGIN_PATH {
            // Public entry: no network call, and the next protected
            // navigation must re-verify.
            self.phase = Phase::Unauthenticated;
            self.checked_for_path = None;
            return GateAction::None;
        }

        if self.checked_for_path.as_deref() == Some(path) {
            return GateAction::None;
        }
        if same_path && self.phase == Phase::Verifying {
            // Already in flight for this path.
            return GateAction::None;
        }

        self.phase = Phase::Verifying;
        GateAction::Verify {
            path: path.to_owned(),
        }
    }

    /// A verification for `path` settled with `ok`. Results for a path the
    /// visitor has since left are discarded.
    pub fn settle_verify(&mut self, path: &str, ok: bool) {
        if path != self.current_path {
            return;
        }
        self.phase = if ok {
            Phase::Authenticated
        } else {
            Phase::Unauthenticated
        };
        self.checked_for_path = Some(path.to_owned());
    }

    /// Login succeeded. The server may have rotated the session, so the
    /// next protected navigation re-verifies instead of trusting this.
    pub fn login_succeeded(&mut self) {
        self.phase = Phase::Authenticated;
        self.checked_for_path = None;
    }

    pub fn login_failed(&mut self) {
        self.phase = Phase::Unauthenticated;
        self.checked_for_path = None;
    }

    /// Unconditional local reset; the server call is the caller's problem.
    pub fn logout(&mut self) {
        self.phase = Phase::Unauthenticated;
        self.checked_for_path = None;
    }
}

/// Owning handle over the session signal. Copyable; hand it out via
/// context and let views call the operations.
#[derive(Clone, Copy)]
pub struct Session(RwSignal<SessionState>);

impl Session {
    pub fn new() -> Self {
        Self(RwSignal::new(SessionState::default()))
    }

    /// Reactive read of the current phase.
    pub fn phase(&self) -> Phase {
        self.0.with(SessionState::phase)
    }

    /// Drive the gate from a navigation event. Spawns the verification
    /// request when the machine asks for one; a failed or errored verify
    /// degrades silently to unauthenticated.
    pub fn navigated_to(&self, path: &str) {
        let action = self.0.try_update(|s| s.enter_route(path));
        if let Some(GateAction::Verify { path }) = action {
            let state = self.0;
            leptos::task::spawn_local(async move {
                let ok = match api::verify_session().await {
                    Ok(valid) => valid,
                    Err(err) => {
                        log::warn!("session verify failed: {err}");
                        false
                    }
                };
                state.update(|s| s.settle_verify(&path, ok));
            });
        }
    }

    /// Post credentials to the session endpoint. Errors propagate unchanged
    /// so the caller can render them; the gate itself stays unauthenticated.
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        let result = api::login(credentials).await;
        self.0.update(|s| match &result {
            Ok(_) => s.login_succeeded(),
            Err(_) => s.login_failed(),
        });
        result
    }

    /// Best-effort logout: the local state clears even when the server
    /// call fails, since the user's intent is to leave the protected area.
    pub async fn logout(&self) {
        if let Err(err) = api::logout().await {
            log::warn!("logout request failed: {err}");
        }
        self.0.update(SessionState::logout);
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
