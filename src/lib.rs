//! # enroll-admin
//!
//! Leptos + WASM admin dashboard for membership enrollment records.
//! A thin client over the enrollment REST backend: session-cookie
//! authentication with a verification gate on protected routes, and
//! CRUD views for the approval workflow (pending → approved/canceled).
//!
//! This crate contains pages, components, application state, and the
//! REST helpers. All state models are plain structs testable on the
//! host; browser calls are gated behind the `csr` feature.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
