//! Transient notification state.
//!
//! All errors surface to the user as short-lived toasts; nothing retries
//! automatically. The model only tracks the list — the dismiss timer lives
//! in the `ToastHost` component.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct ToastState {
    entries: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    pub fn entries(&self) -> &[Toast] {
        &self.entries
    }

    /// Append a toast and return its id for later dismissal.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Toast {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    /// Remove a toast by id; unknown ids are ignored (the timer may race
    /// a manual dismiss).
    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|t| t.id != id);
    }
}

/// Copyable handle for pushing notifications from anywhere in the tree.
#[derive(Clone, Copy)]
pub struct Toasts(RwSignal<ToastState>);

impl Toasts {
    pub fn new() -> Self {
        Self(RwSignal::new(ToastState::default()))
    }

    pub fn entries(&self) -> Vec<Toast> {
        self.0.with(|s| s.entries().to_vec())
    }

    pub fn success(&self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Success, message)
    }

    pub fn error(&self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Error, message)
    }

    pub fn push(&self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.0
            .try_update(|s| s.push(kind, message))
            .unwrap_or_default()
    }

    pub fn dismiss(&self, id: u64) {
        self.0.update(|s| s.dismiss(id));
    }
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}
