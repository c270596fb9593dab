//! Page controller: wires the four handlers to the DOM.
//!
//! One [`PageController`] owns every piece of page state (the current QR
//! widget). Handlers share it through an `Rc` captured by their event
//! closures, which live for the lifetime of the page.

use crate::api;
use crate::dom::{self, element, field_value, set_field_value, show_paragraph, text_element};
use crate::entry::{FormFields, UNEXPECTED_ERROR_MESSAGE};
use crate::message::Message;
use crate::prefill::{prefill_values, PREFILL_FIELDS};
use crate::qr::{self, CorrectLevel, PrefillUrl, QrError};
use crate::summary::{self, SummaryView};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, HtmlFormElement, HtmlInputElement, UrlSearchParams};

const FORM_ID: &str = "workLogForm";
const MESSAGE_AREA_ID: &str = "messageArea";
const LOAD_SUMMARY_BUTTON_ID: &str = "loadSummaryBtn";
const SUMMARY_CONTAINER_ID: &str = "summaryTableContainer";
const GENERATE_QR_BUTTON_ID: &str = "generateQrBtn";
const QR_INPUT_ID: &str = "qrDataInput";
const QR_CONTAINER_ID: &str = "qrCodeImageContainer";

#[wasm_bindgen]
extern "C" {
    /// The qrcodejs widget, loaded from its own script tag.
    #[wasm_bindgen(js_name = QRCode)]
    type QrCode;

    #[wasm_bindgen(constructor, js_class = "QRCode", catch)]
    fn new(container: &Element, options: &JsValue) -> Result<QrCode, JsValue>;
}

pub struct PageController {
    document: Document,
    qr_code: RefCell<Option<QrCode>>,
}

/// Attaches the controller to the current document.
pub fn mount() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("no document available; work log controller not mounted");
        return;
    };
    let controller = Rc::new(PageController {
        document,
        qr_code: RefCell::new(None),
    });
    controller.bind_form();
    controller.bind_summary();
    controller.bind_qr();
    controller.prefill_from_url();
}

fn on_event<T>(target: &T, event: &str, handler: impl FnMut(Event) + 'static)
where
    T: AsRef<web_sys::EventTarget>,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    if let Err(err) = target
        .as_ref()
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        log::error!("failed to bind {event} listener: {err:?}");
    }
    closure.forget();
}

impl PageController {
    fn show_message(&self, message: &Message) {
        match element::<HtmlElement>(&self.document, MESSAGE_AREA_ID) {
            Some(area) => {
                area.set_text_content(Some(&message.text));
                area.set_class_name(message.kind.class_name());
            }
            None => dom::alert(&message.text),
        }
    }

    // --- FormSubmitter ---

    fn bind_form(self: &Rc<Self>) {
        let Some(form) = element::<HtmlFormElement>(&self.document, FORM_ID) else {
            return;
        };
        let controller = Rc::clone(self);
        let target = form.clone();
        on_event(&target, "submit", move |event: Event| {
            event.prevent_default();
            controller.submit(form.clone());
        });
    }

    fn submit(self: &Rc<Self>, form: HtmlFormElement) {
        let fields = FormFields {
            project_number: field_value(&self.document, "project_number"),
            worker_name: field_value(&self.document, "worker_name"),
            work_details: field_value(&self.document, "work_details"),
            work_time_hours: field_value(&self.document, "work_time_hours"),
        };

        let input = match fields.validate() {
            Ok(input) => input,
            Err(err) => {
                self.show_message(&Message::error(err.to_string()));
                return;
            }
        };

        let controller = Rc::clone(self);
        wasm_bindgen_futures::spawn_local(async move {
            match api::post_work_entry(&input).await {
                Ok(outcome) => {
                    controller.show_message(&outcome.message());
                    if outcome.resets_form() {
                        form.reset();
                    }
                }
                Err(err) => {
                    log::error!("error submitting work log: {err}");
                    controller.show_message(&Message::error(UNEXPECTED_ERROR_MESSAGE));
                }
            }
        });
    }

    // --- SummaryLoader ---

    fn bind_summary(self: &Rc<Self>) {
        let Some(button) = element::<HtmlElement>(&self.document, LOAD_SUMMARY_BUTTON_ID) else {
            return;
        };
        let controller = Rc::clone(self);
        on_event(&button, "click", move |_event: Event| controller.load_summary());
    }

    fn load_summary(self: &Rc<Self>) {
        let Some(container) = self.document.get_element_by_id(SUMMARY_CONTAINER_ID) else {
            return;
        };
        show_paragraph(&self.document, &container, summary::LOADING_TEXT, None);

        let controller = Rc::clone(self);
        wasm_bindgen_futures::spawn_local(async move {
            let result = api::fetch_summary().await;
            let document = &controller.document;
            match result {
                Ok(SummaryView::NoData) => {
                    show_paragraph(document, &container, summary::NO_DATA_TEXT, None);
                }
                Ok(SummaryView::Table(cells)) => match build_summary_table(document, &cells) {
                    Ok(table) => {
                        container.set_inner_html("");
                        if let Err(err) = container.append_child(&table) {
                            log::error!("failed to attach summary table: {err:?}");
                        }
                    }
                    Err(err) => {
                        log::error!("error building work summary table: {err:?}");
                        show_paragraph(document, &container, "Error loading summary: could not build table", Some("message error"));
                    }
                },
                Err(err) => {
                    log::error!("error fetching work summary: {err}");
                    show_paragraph(document, &container, &err.display_text(), Some("message error"));
                }
            }
        });
    }

    // --- QrGenerator ---

    fn bind_qr(self: &Rc<Self>) {
        let (Some(button), Some(input), Some(container)) = (
            element::<HtmlElement>(&self.document, GENERATE_QR_BUTTON_ID),
            element::<HtmlInputElement>(&self.document, QR_INPUT_ID),
            self.document.get_element_by_id(QR_CONTAINER_ID),
        ) else {
            return;
        };
        let controller = Rc::clone(self);
        on_event(&button, "click", move |_event: Event| {
            controller.generate_qr(&input, &container);
        });
    }

    fn generate_qr(&self, input: &HtmlInputElement, container: &Element) {
        let (origin, pathname) = page_location();
        let prefill = match PrefillUrl::build(&origin, &pathname, &input.value()) {
            Ok(prefill) => prefill,
            Err(err) => {
                dom::alert(&err.to_string());
                let _ = input.focus();
                return;
            }
        };

        container.set_inner_html("");
        self.qr_code.borrow_mut().take();

        let rendered = qr_options(&prefill.url)
            .and_then(|options| QrCode::new(container, &options))
            .map_err(|err| QrError::Render(format!("{err:?}")));
        match rendered {
            Ok(code) => *self.qr_code.borrow_mut() = Some(code),
            Err(err) => {
                log::error!("{err}");
                show_paragraph(&self.document, container, qr::RENDER_FAILED_TEXT, Some("message error"));
            }
        }
    }

    // --- UrlPrefiller ---

    fn prefill_from_url(&self) {
        let search = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let Ok(params) = UrlSearchParams::new_with_str(&search) else {
            return;
        };
        let pairs = PREFILL_FIELDS
            .iter()
            .filter_map(|field| params.get(field).map(|value| (*field, value)));
        for (field, value) in prefill_values(pairs) {
            set_field_value(&self.document, field, &value);
        }
    }
}

fn build_summary_table(document: &Document, cells: &[[String; 2]]) -> Result<Element, JsValue> {
    let table = document.create_element("table")?;
    table.set_class_name(summary::TABLE_CLASS);

    let thead = document.create_element("thead")?;
    let header_row = document.create_element("tr")?;
    for header in summary::HEADERS {
        header_row.append_child(&text_element(document, "th", header)?)?;
    }
    thead.append_child(&header_row)?;
    table.append_child(&thead)?;

    let tbody = document.create_element("tbody")?;
    for row in cells {
        let tr = document.create_element("tr")?;
        for cell in row {
            tr.append_child(&text_element(document, "td", cell)?)?;
        }
        tbody.append_child(&tr)?;
    }
    table.append_child(&tbody)?;

    Ok(table)
}

fn page_location() -> (String, String) {
    let Some(location) = web_sys::window().map(|w| w.location()) else {
        return (String::new(), String::new());
    };
    (
        location.origin().unwrap_or_default(),
        location.pathname().unwrap_or_default(),
    )
}

fn qr_options(text: &str) -> Result<JsValue, JsValue> {
    let options = js_sys::Object::new();
    let entries = [
        ("text", JsValue::from_str(text)),
        ("width", JsValue::from(qr::QR_SIZE)),
        ("height", JsValue::from(qr::QR_SIZE)),
        ("colorDark", JsValue::from_str(qr::COLOR_DARK)),
        ("colorLight", JsValue::from_str(qr::COLOR_LIGHT)),
        ("correctLevel", JsValue::from(CorrectLevel::H.code())),
    ];
    for (key, value) in entries {
        js_sys::Reflect::set(&options, &JsValue::from_str(key), &value)?;
    }
    Ok(options.into())
}
