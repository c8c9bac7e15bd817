//! Browser console output.
//!
//! The site has no server to log to, so this is the whole logging surface:
//! a styled banner on mount, route changes at debug level, and errors.

use codex_content::Route;
use codex_content::site::{PRODUCT_FULL_NAME, VERSION};
use wasm_bindgen::JsValue;
use web_sys::console;

/// Print the product banner.
pub fn banner() {
    console::log_2(
        &JsValue::from_str(&format!("%c{PRODUCT_FULL_NAME} {VERSION}")),
        &JsValue::from_str("color: #00A3FF; font-weight: 900; font-size: 14px;"),
    );
    console::log_2(
        &JsValue::from_str("%cThe IDE that travels with you. Built with Rust + Leptos."),
        &JsValue::from_str("color: #71717A;"),
    );
}

/// Log a navigation to `path`.
pub fn route_changed(path: &str) {
    match Route::from_path(path) {
        Ok(route) => console::debug_1(&JsValue::from_str(&format!(
            "[codex] route {} ({})",
            route,
            route.title()
        ))),
        Err(err) => console::warn_1(&JsValue::from_str(&format!("[codex] {err}"))),
    }
}

/// Log an error.
pub fn error(message: &str) {
    console::error_1(&JsValue::from_str(&format!("[codex] {message}")));
}
