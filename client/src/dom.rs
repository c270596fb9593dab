//! Small helpers over `web-sys` for looking up and updating page elements.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlInputElement, HtmlTextAreaElement};

pub fn element<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document.get_element_by_id(id)?.dyn_into::<T>().ok()
}

/// Current value of an `<input>` or `<textarea>`; empty when the field is
/// missing.
pub fn field_value(document: &Document, id: &str) -> String {
    let Some(el) = document.get_element_by_id(id) else {
        return String::new();
    };
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

/// Returns `false` when no matching field exists.
pub fn set_field_value(document: &Document, id: &str, value: &str) -> bool {
    let Some(el) = document.get_element_by_id(id) else {
        return false;
    };
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.set_value(value);
        true
    } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        area.set_value(value);
        true
    } else {
        false
    }
}

/// Replaces the container's contents with a single `<p>`.
pub fn show_paragraph(document: &Document, container: &Element, text: &str, class: Option<&str>) {
    container.set_inner_html("");
    let paragraph = match document.create_element("p") {
        Ok(p) => p,
        Err(err) => {
            log::error!("failed to create paragraph: {err:?}");
            container.set_text_content(Some(text));
            return;
        }
    };
    if let Some(class) = class {
        paragraph.set_class_name(class);
    }
    paragraph.set_text_content(Some(text));
    if let Err(err) = container.append_child(&paragraph) {
        log::error!("failed to append paragraph: {err:?}");
    }
}

/// Creates an element with the given text content.
pub fn text_element(document: &Document, tag: &str, text: &str) -> Result<Element, JsValue> {
    let el = document.create_element(tag)?;
    el.set_text_content(Some(text));
    Ok(el)
}

pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
