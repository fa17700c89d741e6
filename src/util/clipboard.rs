//! Clipboard writes and the current origin, for sharing public CV links.

/// Copy `text` to the system clipboard. Returns whether the write landed.
pub async fn copy_text(text: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        let promise = window.navigator().clipboard().write_text(text);
        wasm_bindgen_futures::JsFuture::from(promise).await.is_ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = text;
        false
    }
}

/// The page origin, e.g. `https://admin.example.org`.
pub fn window_origin() -> String {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "csr"))]
    {
        String::new()
    }
}
