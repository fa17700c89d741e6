//! Routed views: login, dashboard home, the two member lists, and the
//! member detail/edit screens.

pub mod edit_member;
pub mod home;
pub mod login;
pub mod members;
pub mod view_member;
