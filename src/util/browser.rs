//! Full-page navigation.

/// Hard redirect: replaces the current document, dropping all in-memory
/// state. Used for session expiry, where a soft route transition would
/// leave stale signals behind. Requires a browser environment.
pub fn hard_redirect(path: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if window.location().set_href(path).is_err() {
                leptos::logging::warn!("redirect to {path} failed");
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = path;
    }
}
