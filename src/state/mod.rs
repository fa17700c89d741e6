//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `toast`, `edit`) so individual
//! components can depend on small focused models. Every model is a plain
//! struct mutated through its owning handle; the handles wrap `RwSignal`s
//! provided via context, and nothing else writes to those signals.

pub mod edit;
pub mod session;
pub mod toast;
