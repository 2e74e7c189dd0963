//! Toast notifications shown after background actions finish.
//!
//! The notice itself is plain data; rendering lives behind `hydrate` and
//! drops each toast after [`NOTICE_TIMEOUT_MS`].

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

/// Id of the container toasts are appended to (created on demand).
pub const TOAST_CONTAINER_ID: &str = "toastContainer";
pub const NOTICE_TIMEOUT_MS: u64 = 4000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Warning,
    Error,
}

impl NoticeKind {
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Success => "toast-success",
            Self::Warning => "toast-warning",
            Self::Error => "toast-error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub body: String,
}

impl Notice {
    pub fn new(kind: NoticeKind, title: &str, body: &str) -> Self {
        Self {
            kind,
            title: title.to_owned(),
            body: body.to_owned(),
        }
    }

    pub fn clone_succeeded(objects_cloned: u64) -> Self {
        let noun = if objects_cloned == 1 { "object" } else { "objects" };
        Self::new(
            NoticeKind::Success,
            "Clone success!",
            &format!("{objects_cloned} {noun} cloned into new scene"),
        )
    }

    pub fn clone_failed() -> Self {
        Self::new(NoticeKind::Warning, "Scene Clone Failed!", "Something went wrong!")
    }
}

/// Render `notice` as a toast and schedule its removal.
#[cfg(feature = "hydrate")]
pub fn show(notice: &Notice) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let container = match document.get_element_by_id(TOAST_CONTAINER_ID) {
        Some(el) => el,
        None => {
            let Ok(el) = document.create_element("div") else {
                return;
            };
            el.set_id(TOAST_CONTAINER_ID);
            el.set_class_name("toast-container");
            if let Some(body) = document.body() {
                let _ = body.append_child(&el);
            }
            el
        }
    };

    let Ok(toast) = document.create_element("div") else {
        return;
    };
    toast.set_class_name(&format!("toast show {}", notice.kind.class_name()));
    let _ = toast.set_attribute("role", "alert");
    if let Ok(title) = document.create_element("strong") {
        title.set_text_content(Some(&notice.title));
        let _ = toast.append_child(&title);
    }
    if let Ok(body) = document.create_element("div") {
        body.set_class_name("toast-body");
        body.set_text_content(Some(&notice.body));
        let _ = toast.append_child(&body);
    }
    let _ = container.append_child(&toast);

    let dismissed = toast.clone();
    if let Err(e) = super::dom::on(&toast, "click", move |_| dismissed.remove()) {
        log::debug!("toast stays until timeout: {e}");
    }

    wasm_bindgen_futures::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(NOTICE_TIMEOUT_MS)).await;
        toast.remove();
    });
}
