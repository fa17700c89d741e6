//! File-input plumbing for the edit form: turn picked browser files into
//! `UploadFile`s with object-URL previews.

#[cfg(feature = "csr")]
use crate::state::edit::UploadFile;

/// Object URL for an `<img src=…>` preview of a picked file.
#[cfg(feature = "csr")]
pub fn object_url(file: &web_sys::File) -> Option<String> {
    web_sys::Url::create_object_url_with_blob(file).ok()
}

/// Drain an `<input type="file">` into upload models. Resets the input
/// value so re-picking the same file fires `change` again.
#[cfg(feature = "csr")]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn uploads_from_input(input: &web_sys::HtmlInputElement) -> Vec<UploadFile> {
    let Some(list) = input.files() else {
        return Vec::new();
    };
    let mut uploads = Vec::new();
    for index in 0..list.length() {
        if let Some(file) = list.get(index) {
            uploads.push(UploadFile {
                name: file.name(),
                size: file.size() as u64,
                preview_url: object_url(&file),
                handle: Some(file),
            });
        }
    }
    input.set_value("");
    uploads
}

/// Resolve the input element behind a change event.
#[cfg(feature = "csr")]
pub fn input_from_event(ev: &leptos::ev::Event) -> Option<web_sys::HtmlInputElement> {
    use wasm_bindgen::JsCast;
    ev.target()?.dyn_into::<web_sys::HtmlInputElement>().ok()
}
