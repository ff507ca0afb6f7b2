use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, NodeList, Window};

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window().and_then(|window| window.document())
}

pub fn js_error(err: JsValue) -> String {
    err.as_string()
        .or_else(|| {
            err.dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{err:?}"))
}

fn elements(nodes: Result<NodeList, JsValue>) -> Vec<Element> {
    let Ok(nodes) = nodes else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Every element matching `selector`, in document order.
pub fn query_all(root: &Document, selector: &str) -> Vec<Element> {
    elements(root.query_selector_all(selector))
}

/// Descendants of `root` matching `selector`.
pub fn query_within(root: &Element, selector: &str) -> Vec<Element> {
    elements(root.query_selector_all(selector))
}

pub fn add_class(element: &Element, class: &str) {
    let _ = element.class_list().add_1(class);
}

pub fn remove_class(element: &Element, class: &str) {
    let _ = element.class_list().remove_1(class);
}

pub fn set_class(element: &Element, class: &str, on: bool) {
    let _ = element.class_list().toggle_with_force(class, on);
}

pub fn set_display(element: &Element, shown: bool) {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        let value = if shown { "" } else { "none" };
        let _ = html.style().set_property("display", value);
    }
}

pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

pub fn inner_height() -> f64 {
    window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

/// Run `callback` once after `delay_ms`.
pub fn set_timeout(delay_ms: i32, callback: impl FnOnce() + 'static) {
    let Some(window) = window() else { return };
    let closure = wasm_bindgen::closure::Closure::once_into_js(callback);
    if let Err(err) = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(closure.unchecked_ref(), delay_ms)
    {
        bevy::log::warn!("setTimeout failed: {}", js_error(err));
    }
}
