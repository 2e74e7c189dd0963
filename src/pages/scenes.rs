//! Scene-management page: select, enter, copy, delete and clone scenes.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server renders two inputs backed by `<datalist>` candidates (the
//! user's scenes and public scenes) plus a clone panel. Action buttons are
//! only enabled while their input exactly matches a candidate. Cloning runs
//! one `POST /persist/...` request; its result is reported with a toast.

#[cfg(test)]
#[path = "scenes_test.rs"]
mod scenes_test;

use crate::state::clone::CloneBlocked;

/// DOM hooks expected in the scene-management markup.
pub mod ids {
    pub const USER_SCENE_INPUT: &str = "userSceneInput";
    pub const USER_SCENE_DATALIST: &str = "userSceneDatalist";
    pub const USER_SCENE_URL: &str = "userSceneUrl";
    pub const ENTER_USER_SCENE: &str = "enterUserSceneBtn";
    pub const CLONE_USER_SCENE: &str = "cloneUserSceneBtn";
    pub const DELETE_USER_SCENE: &str = "deleteUserSceneBtn";
    pub const COPY_USER_SCENE_URL: &str = "copyUserSceneUrlBtn";

    pub const PUBLIC_SCENE_INPUT: &str = "publicSceneInput";
    pub const PUBLIC_SCENE_DATALIST: &str = "publicSceneDatalist";
    pub const PUBLIC_SCENE_URL: &str = "publicSceneUrl";
    pub const ENTER_PUBLIC_SCENE: &str = "enterPublicSceneBtn";
    pub const CLONE_PUBLIC_SCENE: &str = "clonePublicSceneBtn";

    pub const CLOSE_CLONE_SCENE: &str = "closeCloneScene";
    pub const SOURCE_SCENE: &str = "sourceScene";
    pub const NEW_SCENE_NAME_INPUT: &str = "newSceneNameInput";
    pub const DO_CLONE_SCENE: &str = "doCloneSceneBtn";
    pub const DO_CLONE_CONTAINER: &str = "doCloneSceneContainer";
    pub const CLONE_SCENE_CREATED: &str = "cloneSceneCreated";
    pub const CLONE_SCENE_URL: &str = "cloneSceneUrl";
    pub const COPY_CLONE_SCENE_URL: &str = "copyCloneSceneUrlBtn";
    pub const ENTER_CLONE_SCENE: &str = "enterCloneSceneBtn";
}

/// Confirmation text shown before a delete is submitted.
pub fn delete_prompt(scene: &str) -> String {
    format!("Are you sure you want to delete {scene}?")
}

/// Whether a blocked clone submission is worth telling the user about.
///
/// Double clicks while pending, or clicks on an already-created clone, are
/// silently ignored.
pub fn blocked_notice_text(blocked: &CloneBlocked) -> Option<String> {
    match blocked {
        CloneBlocked::InFlight | CloneBlocked::AlreadyCreated => None,
        CloneBlocked::NoSource | CloneBlocked::EmptyName | CloneBlocked::NotSignedIn => {
            Some(capitalize(&blocked.to_string()))
        }
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;

    use web_sys::{Document, Element, Event, HtmlInputElement, Window};

    use super::{blocked_notice_text, delete_prompt, ids};
    use crate::config::{PageConfig, routes};
    use crate::error::ClientError;
    use crate::net::api;
    use crate::routing::browser::{BrowserLocation, BrowserRouter, DomPanelHost, install_hashchange};
    use crate::routing::{ClientRouter, ROUTE_PAGE_LOADED_EVENT, RouteTable};
    use crate::state::clone::{CloneDraft, CloneStatus};
    use crate::state::scenes::{SceneSource, ScenesState};
    use crate::state::selection::{PageOrigin, SelectionChange};
    use crate::util::dom;
    use crate::util::notice::{self, Notice, NoticeKind};
    use crate::util::redirect::redirect_to;

    type State = Rc<RefCell<ScenesState>>;

    /// Every hook of the page, resolved once at mount.
    struct ScenesView {
        window: Window,
        document: Document,
        origin: PageOrigin,

        user_input: HtmlInputElement,
        user_url: HtmlInputElement,
        enter_user: Element,
        clone_user: Element,
        delete_user: Element,
        copy_user_url: Element,

        public_input: HtmlInputElement,
        public_url: HtmlInputElement,
        enter_public: Element,
        clone_public: Element,

        close_clone: Element,
        source_scene: HtmlInputElement,
        new_name: HtmlInputElement,
        do_clone: Element,
        do_clone_container: Element,
        clone_created: Element,
        clone_url: HtmlInputElement,
        copy_clone_url: Element,
        enter_clone: Element,
    }

    impl ScenesView {
        fn resolve(window: Window, document: Document) -> Result<Self, ClientError> {
            let input = |id| dom::require::<HtmlInputElement>(&document, id, "input element");
            let element = |id| dom::require::<Element>(&document, id, "element");
            Ok(Self {
                origin: dom::page_origin(&window),
                user_input: input(ids::USER_SCENE_INPUT)?,
                user_url: input(ids::USER_SCENE_URL)?,
                enter_user: element(ids::ENTER_USER_SCENE)?,
                clone_user: element(ids::CLONE_USER_SCENE)?,
                delete_user: element(ids::DELETE_USER_SCENE)?,
                copy_user_url: element(ids::COPY_USER_SCENE_URL)?,
                public_input: input(ids::PUBLIC_SCENE_INPUT)?,
                public_url: input(ids::PUBLIC_SCENE_URL)?,
                enter_public: element(ids::ENTER_PUBLIC_SCENE)?,
                clone_public: element(ids::CLONE_PUBLIC_SCENE)?,
                close_clone: element(ids::CLOSE_CLONE_SCENE)?,
                source_scene: input(ids::SOURCE_SCENE)?,
                new_name: input(ids::NEW_SCENE_NAME_INPUT)?,
                do_clone: element(ids::DO_CLONE_SCENE)?,
                do_clone_container: element(ids::DO_CLONE_CONTAINER)?,
                clone_created: element(ids::CLONE_SCENE_CREATED)?,
                clone_url: input(ids::CLONE_SCENE_URL)?,
                copy_clone_url: element(ids::COPY_CLONE_SCENE_URL)?,
                enter_clone: element(ids::ENTER_CLONE_SCENE)?,
                window,
                document,
            })
        }

        fn input(&self, source: SceneSource) -> &HtmlInputElement {
            match source {
                SceneSource::User => &self.user_input,
                SceneSource::Public => &self.public_input,
            }
        }

        fn datalist(source: SceneSource) -> &'static str {
            match source {
                SceneSource::User => ids::USER_SCENE_DATALIST,
                SceneSource::Public => ids::PUBLIC_SCENE_DATALIST,
            }
        }

        fn check_input(&self, state: &State, source: SceneSource) {
            let candidates = dom::datalist_values(&self.document, Self::datalist(source));
            let value = self.input(source).value();
            let change = state
                .borrow_mut()
                .selection_mut(source)
                .check(&value, &candidates, &self.origin);
            self.apply_selection(source, &change);
        }

        fn apply_selection(&self, source: SceneSource, change: &SelectionChange) {
            let disabled = !change.is_valid();
            match source {
                SceneSource::User => {
                    self.user_url.set_value(&change.url_field);
                    if let Some(scene) = &change.selected {
                        let _ = self.delete_user.set_attribute("value", scene);
                    }
                    for btn in [&self.enter_user, &self.clone_user, &self.delete_user, &self.copy_user_url] {
                        dom::set_disabled(btn, disabled);
                    }
                }
                SceneSource::Public => {
                    self.public_url.set_value(&change.url_field);
                    for btn in [&self.enter_public, &self.clone_public] {
                        dom::set_disabled(btn, disabled);
                    }
                }
            }
        }

        /// Reset the clone panel for a freshly captured source.
        fn show_draft(&self, draft: &CloneDraft) {
            self.source_scene.set_value(draft.source());
            self.new_name.set_value(draft.new_name());
            self.new_name.set_read_only(false);
            self.clone_url.set_value("");
            dom::set_disabled(&self.do_clone, !draft.can_submit());
            dom::set_hidden(&self.clone_created, true);
            dom::set_hidden(&self.do_clone_container, false);
        }

        fn show_status(&self, draft: &CloneDraft) {
            match draft.status() {
                CloneStatus::Editing | CloneStatus::Failed(_) => {
                    self.new_name.set_read_only(false);
                    dom::set_disabled(&self.do_clone, !draft.can_submit());
                }
                CloneStatus::Pending => {
                    self.new_name.set_read_only(true);
                    dom::set_disabled(&self.do_clone, true);
                }
                CloneStatus::Created { url, .. } => {
                    self.new_name.set_read_only(true);
                    self.clone_url.set_value(url);
                    dom::set_hidden(&self.do_clone_container, true);
                    dom::set_hidden(&self.clone_created, false);
                }
            }
        }

        fn navigate_to_url(&self, button: &Element, url: &HtmlInputElement) {
            if dom::is_disabled(button) {
                return;
            }
            let url = url.value();
            if !url.is_empty() {
                redirect_to(&url);
            }
        }
    }

    fn start_clone(view: &ScenesView, state: &State, router: &BrowserRouter, source: SceneSource) {
        let draft = state.borrow_mut().start_clone(source).cloned();
        let Some(draft) = draft else {
            log::debug!("clone requested without a valid {source:?} selection");
            return;
        };
        view.show_draft(&draft);
        router.navigate(routes::CLONE_SCENE);
    }

    fn submit_clone(view: &Rc<ScenesView>, state: &State) {
        let submission = {
            let mut st = state.borrow_mut();
            let username = st.username().map(str::to_owned);
            st.draft.begin_submit(username.as_deref())
        };
        let submission = match submission {
            Ok(submission) => submission,
            Err(blocked) => {
                log::debug!("clone not sent: {blocked}");
                if let Some(text) = blocked_notice_text(&blocked) {
                    notice::show(&Notice::new(NoticeKind::Error, "Cannot clone scene", &text));
                }
                return;
            }
        };
        view.show_status(&state.borrow().draft);

        let view = Rc::clone(view);
        let state = Rc::clone(state);
        wasm_bindgen_futures::spawn_local(async move {
            let result = api::clone_scene(&submission.username, &submission.new_name, &submission.request).await;
            let finished = {
                let mut st = state.borrow_mut();
                let status = st.draft.complete(submission.generation, result, &view.origin).cloned();
                if status.is_some() {
                    view.show_status(&st.draft);
                }
                status
            };
            match finished {
                Some(CloneStatus::Created { objects_cloned, .. }) => {
                    notice::show(&Notice::clone_succeeded(objects_cloned));
                }
                Some(_) => notice::show(&Notice::clone_failed()),
                None => log::debug!("clone of {} finished after its draft was replaced", submission.new_name),
            }
        });
    }

    pub(super) fn mount() -> Result<(), ClientError> {
        let window = dom::window()?;
        let document = dom::document()?;
        let config = dom::read_page_config(&document, PageConfig::scenes())?;
        let view = Rc::new(ScenesView::resolve(window.clone(), document.clone())?);

        let router = Rc::new(ClientRouter::new(
            RouteTable::new(config.routes.clone())?,
            DomPanelHost::new(document.clone()),
            BrowserLocation::new(window.clone()),
        ));
        let state: State = Rc::new(RefCell::new(ScenesState::new(config.username.clone())));

        if config.username.is_none() {
            let state = Rc::clone(&state);
            wasm_bindgen_futures::spawn_local(async move {
                match api::fetch_user_state().await {
                    Some(user) => {
                        let username = user.signed_in_username().map(str::to_owned);
                        if username.is_none() {
                            log::warn!("user_state reports no signed-in user; cloning disabled");
                        }
                        state.borrow_mut().set_username(username);
                    }
                    None => log::warn!("could not load user_state; cloning disabled"),
                }
            });
        }

        for source in [SceneSource::User, SceneSource::Public] {
            for event in ["input", "change"] {
                let view_cb = Rc::clone(&view);
                let state = Rc::clone(&state);
                dom::on(view.input(source), event, move |_| view_cb.check_input(&state, source))?;
            }
        }

        {
            let view_cb = Rc::clone(&view);
            dom::on(&view.copy_user_url, "click", move |_| {
                if !dom::is_disabled(&view_cb.copy_user_url) {
                    dom::copy_to_clipboard(&view_cb.window, &view_cb.user_url.value());
                }
            })?;
        }
        {
            let view_cb = Rc::clone(&view);
            dom::on(&view.enter_user, "click", move |_| {
                view_cb.navigate_to_url(&view_cb.enter_user, &view_cb.user_url);
            })?;
        }
        {
            let view_cb = Rc::clone(&view);
            dom::on(&view.enter_public, "click", move |_| {
                view_cb.navigate_to_url(&view_cb.enter_public, &view_cb.public_url);
            })?;
        }
        {
            let view_cb = Rc::clone(&view);
            let state = Rc::clone(&state);
            dom::on(&view.delete_user, "click", move |ev: Event| {
                let scene = state.borrow().user_scene.selected().map(str::to_owned);
                let confirmed = match scene {
                    Some(scene) if !dom::is_disabled(&view_cb.delete_user) => {
                        dom::confirm(&view_cb.window, &delete_prompt(&scene))
                    }
                    _ => false,
                };
                if !confirmed {
                    ev.prevent_default();
                }
            })?;
        }

        for (button, source) in [
            (&view.clone_user, SceneSource::User),
            (&view.clone_public, SceneSource::Public),
        ] {
            let view_cb = Rc::clone(&view);
            let state = Rc::clone(&state);
            let router = Rc::clone(&router);
            dom::on(button, "click", move |_| start_clone(&view_cb, &state, &router, source))?;
        }

        {
            let router = Rc::clone(&router);
            dom::on(&view.close_clone, "click", move |_| {
                router.navigate(routes::SCENE_SELECT);
            })?;
        }
        for event in ["input", "keyup"] {
            let view_cb = Rc::clone(&view);
            let state = Rc::clone(&state);
            dom::on(&view.new_name, event, move |_| {
                let can_submit = state.borrow_mut().draft.set_new_name(&view_cb.new_name.value());
                dom::set_disabled(&view_cb.do_clone, !can_submit);
            })?;
        }
        {
            let view_cb = Rc::clone(&view);
            let state = Rc::clone(&state);
            dom::on(&view.do_clone, "click", move |ev: Event| {
                ev.prevent_default();
                submit_clone(&view_cb, &state);
            })?;
        }
        {
            let view_cb = Rc::clone(&view);
            dom::on(&view.copy_clone_url, "click", move |_| {
                dom::copy_to_clipboard(&view_cb.window, &view_cb.clone_url.value());
            })?;
        }
        {
            let view_cb = Rc::clone(&view);
            dom::on(&view.enter_clone, "click", move |_| {
                let url = view_cb.clone_url.value();
                if !url.is_empty() {
                    redirect_to(&url);
                }
            })?;
        }

        // A bookmarked `#cloneScene` has nothing to clone: send it back.
        if let Some(panel) = router
            .table()
            .get(routes::CLONE_SCENE)
            .and_then(|route| document.get_element_by_id(&route.panel_id))
        {
            let state = Rc::clone(&state);
            let router_cb = Rc::clone(&router);
            dom::on(&panel, ROUTE_PAGE_LOADED_EVENT, move |_| {
                if !state.borrow().clone_ready() {
                    router_cb.navigate(routes::SCENE_SELECT);
                }
            })?;
        }

        // Inputs may arrive prefilled (autofill, back navigation).
        view.check_input(&state, SceneSource::User);
        view.check_input(&state, SceneSource::Public);

        install_hashchange(&window, Rc::clone(&router))?;
        router.dispatch();
        log::info!("scenes page mounted");
        Ok(())
    }
}

/// Attach the scene-management panel to the current page.
///
/// # Errors
///
/// Returns a [`ClientError`] when a required hook is missing or the page
/// configuration is invalid.
#[cfg(feature = "hydrate")]
pub fn mount() -> Result<(), crate::error::ClientError> {
    browser::mount()
}
