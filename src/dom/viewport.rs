use log::{debug, warn};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::js_sys::{Function, Promise, Reflect};
use web_sys::{ScrollBehavior, ScrollToOptions};

/// `(scroll_top, scroll_height, client_height)` of the document.
pub fn scroll_metrics() -> Option<(f64, f64, f64)> {
    let window = web_sys::window()?;
    let root = window.document()?.document_element()?;
    let top = window.scroll_y().unwrap_or_else(|_| root.scroll_top() as f64);
    Some((top, root.scroll_height() as f64, root.client_height() as f64))
}

pub fn scroll_y() -> f64 {
    web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

#[allow(deprecated)]
pub fn smooth_scroll_to(top: f64) {
    if let Some(window) = web_sys::window() {
        let mut options = ScrollToOptions::new();
        options.top(top.max(0.0));
        options.behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Scrolls so that the element with `id` sits `offset` px below the top.
/// Returns false when there is no such element.
pub fn scroll_to_section(id: &str, offset: f64) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let Some(element) = window.document().and_then(|d| d.get_element_by_id(id)) else {
        debug!("No section with id {}", id);
        return false;
    };
    let top = element.get_bounding_client_rect().top() + scroll_y() - offset;
    smooth_scroll_to(top);
    true
}

pub fn open_in_new_tab(href: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.open_with_url_and_target_and_features(href, "_blank", "noopener,noreferrer") {
            warn!("Failed to open {}: {:?}", href, e);
        }
    }
}

/// Locks page scrolling while a modal is open.
pub fn set_scroll_locked(locked: bool) {
    let body = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body());
    if let Some(body) = body {
        let value = if locked { "hidden" } else { "" };
        let _ = body.style().set_property("overflow", value);
    }
}

/// Writes `text` to the clipboard. Errors are logged and swallowed.
pub async fn copy_to_clipboard(text: &str) -> bool {
    match write_clipboard(text) {
        Ok(promise) => match JsFuture::from(promise).await {
            Ok(_) => true,
            Err(e) => {
                debug!("Clipboard write rejected: {:?}", e);
                false
            }
        },
        Err(e) => {
            debug!("Clipboard unavailable: {:?}", e);
            false
        }
    }
}

fn write_clipboard(text: &str) -> Result<Promise, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let clipboard = Reflect::get(&window.navigator(), &JsValue::from_str("clipboard"))?;
    if clipboard.is_undefined() {
        return Err(JsValue::from_str("navigator.clipboard is undefined"));
    }
    let write_text: Function = Reflect::get(&clipboard, &JsValue::from_str("writeText"))?.dyn_into()?;
    write_text.call1(&clipboard, &JsValue::from_str(text))?.dyn_into::<Promise>()
}
