//! Native browser confirm dialog. Destructive row actions (delete,
//! approve/cancel) go through this before any request is made.

/// Ask the visitor to confirm. Outside the browser the answer is always
/// no, which keeps accidental native calls harmless.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
        false
    }
}
