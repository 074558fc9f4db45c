use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// True when `event` was dispatched on the element behind `node` itself.
pub fn originates_from(event: &Event, node: &NodeRef) -> bool {
    match (event.target(), node.get()) {
        (Some(target), Some(node)) => node.is_same_node(target.dyn_ref::<web_sys::Node>()),
        _ => false,
    }
}

/// Opens the native file picker behind `node`, if it is mounted.
pub fn open_picker(node: &NodeRef) {
    match node.cast::<HtmlInputElement>() {
        Some(input) => input.click(),
        None => log::warn!("File input is not mounted"),
    }
}

/// Blocking browser alert.
pub fn notify_user(message: &str) {
    match web_sys::window() {
        Some(window) => {
            if let Err(e) = window.alert_with_message(message) {
                log::error!("Failed to show alert: {:?}", e);
            }
        }
        None => log::error!("No window to notify: {}", message),
    }
}
