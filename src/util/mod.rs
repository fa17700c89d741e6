//! Small browser-glue helpers. Everything here is inert on the host so
//! native test builds never touch `web-sys`.

pub mod clipboard;
pub mod confirm;
pub mod files;
