//! Thin web-sys helpers for attaching to server-rendered markup.
//!
//! Required hooks are resolved once through [`require`]; handlers are
//! registered with [`on`] and live for the lifetime of the page.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{Document, Element, Event, EventTarget, HtmlDataListElement, HtmlOptionElement, Window};

use crate::config::{PAGE_CONFIG_ID, PageConfig};
use crate::error::ClientError;
use crate::state::selection::PageOrigin;

pub const DISABLED_CLASS: &str = "disabled";

pub fn window() -> Result<Window, ClientError> {
    web_sys::window().ok_or(ClientError::NoWindow)
}

pub fn document() -> Result<Document, ClientError> {
    window()?.document().ok_or(ClientError::NoDocument)
}

/// Look up `#id` and cast it to `T`.
///
/// # Errors
///
/// [`ClientError::MissingElement`] when absent,
/// [`ClientError::WrongElementType`] when it is not a `T`.
pub fn require<T: JsCast>(document: &Document, id: &str, expected: &'static str) -> Result<T, ClientError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| ClientError::missing(id))?
        .dyn_into::<T>()
        .map_err(|_| ClientError::WrongElementType { id: id.to_owned(), expected })
}

/// Like [`require`], but a missing element is `Ok(None)`.
///
/// # Errors
///
/// [`ClientError::WrongElementType`] when present but not a `T`.
pub fn optional<T: JsCast>(document: &Document, id: &str, expected: &'static str) -> Result<Option<T>, ClientError> {
    match document.get_element_by_id(id) {
        None => Ok(None),
        Some(el) => el
            .dyn_into::<T>()
            .map(Some)
            .map_err(|_| ClientError::WrongElementType { id: id.to_owned(), expected }),
    }
}

/// Register `handler` for `event` on `target` for the page's lifetime.
///
/// # Errors
///
/// [`ClientError::Js`] if the browser refuses the listener.
pub fn on<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), ClientError>
where
    F: FnMut(Event) + 'static,
{
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Toggle the `disabled` class used by the action buttons.
pub fn set_disabled(el: &Element, disabled: bool) {
    let classes = el.class_list();
    let _ = if disabled {
        classes.add_1(DISABLED_CLASS)
    } else {
        classes.remove_1(DISABLED_CLASS)
    };
}

pub fn is_disabled(el: &Element) -> bool {
    el.class_list().contains(DISABLED_CLASS)
}

pub fn set_hidden(el: &Element, hidden: bool) {
    let classes = el.class_list();
    let _ = if hidden {
        classes.add_1(crate::routing::HIDDEN_CLASS)
    } else {
        classes.remove_1(crate::routing::HIDDEN_CLASS)
    };
}

/// Protocol and hostname of the current page.
pub fn page_origin(window: &Window) -> PageOrigin {
    let location = window.location();
    PageOrigin::new(
        &location.protocol().unwrap_or_default(),
        &location.hostname().unwrap_or_default(),
    )
}

/// Native confirmation dialog; a failure counts as "no".
pub fn confirm(window: &Window, message: &str) -> bool {
    window.confirm_with_message(message).unwrap_or(false)
}

/// Write `text` to the clipboard. A rejected write (permission denied,
/// insecure context) is logged, not surfaced.
pub fn copy_to_clipboard(window: &Window, text: &str) {
    let promise = window.navigator().clipboard().write_text(text);
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(e) = wasm_bindgen_futures::JsFuture::from(promise).await {
            log::warn!("clipboard write failed: err={e:?}");
        }
    });
}

/// Option values of the `<datalist id=...>`, read fresh on each call.
pub fn datalist_values(document: &Document, id: &str) -> Vec<String> {
    let Some(list) = document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlDataListElement>().ok())
    else {
        return Vec::new();
    };
    let options = list.options();
    (0..options.length())
        .filter_map(|i| options.item(i))
        .filter_map(|el| el.dyn_into::<HtmlOptionElement>().ok())
        .map(|opt| opt.value())
        .collect()
}

/// Apply the page's JSON override block (if any) to `preset` and validate.
///
/// # Errors
///
/// [`ClientError::Config`] for malformed JSON or an invalid result.
pub fn read_page_config(document: &Document, preset: PageConfig) -> Result<PageConfig, ClientError> {
    let config = match document.get_element_by_id(PAGE_CONFIG_ID) {
        Some(el) => preset.with_overrides_json(&el.text_content().unwrap_or_default())?,
        None => preset,
    };
    config.validate()?;
    Ok(config)
}

/// Panic hook and console logging; safe to call more than once.
pub fn init_runtime() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    let _ = console_log::init_with_level(level);
}
