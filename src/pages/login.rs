//! Login page: choose email, anonymous or provider sign-in.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server renders the markup; this module decides what each choice does
//! with the stored preferences and where the browser goes next. Name entry
//! lives on the `#signIn` panel, which is prefilled with the remembered
//! display name each time it is activated.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use crate::config::{PageConfig, ReauthPolicy};
use crate::error::ClientError;
use crate::state::prefs::{AuthChoice, PreferenceStore};
use crate::util::redirect::post_auth_destination;
use crate::util::storage::KeyValueStore;
use crate::util::validate::{NameError, NamePattern};

/// DOM hooks expected in the login markup.
pub mod ids {
    pub const USERNAME_INPUT: &str = "usernameInput";
    pub const LOGIN_FORM: &str = "loginForm";
    pub const EMAIL_BUTTON: &str = "customBtnEmail";
    pub const ANON_BUTTON: &str = "customBtnAnon";
    pub const PROVIDER: &str = "provider";
}

/// Provider assumed when the `#provider` element does not name one.
pub const DEFAULT_PROVIDER: &str = "google";

/// What the page should do after a user action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Leave the login page.
    Redirect(String),
    /// Show the name panel, prefilled when a name is remembered.
    AskForName { prefill: Option<String> },
    /// Keep the form open and surface the validation message.
    Rejected(NameError),
}

pub struct LoginFlow<S> {
    prefs: PreferenceStore<S>,
    pattern: NamePattern,
    reauth: ReauthPolicy,
    default_landing: String,
    pending: AuthChoice,
    remembered: Option<String>,
}

impl<S: KeyValueStore> LoginFlow<S> {
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] if the configured name pattern does
    /// not compile.
    pub fn new(config: &PageConfig, store: S) -> Result<Self, ClientError> {
        Ok(Self {
            prefs: PreferenceStore::new(store),
            pattern: config.name_pattern()?,
            reauth: config.reauth,
            default_landing: config.default_landing.clone(),
            pending: AuthChoice::Anonymous,
            remembered: None,
        })
    }

    pub fn prefs(&self) -> &PreferenceStore<S> {
        &self.prefs
    }

    /// Start a visit: forget the previous auth choice and token, keep the name.
    ///
    /// The remembered name is only loaded here; the input is filled when the
    /// `#signIn` panel is activated, since the page opens on its landing panel.
    pub fn on_load(&mut self) -> Option<&str> {
        self.remembered = self.prefs.begin_login_visit();
        self.remembered.as_deref()
    }

    pub fn remembered_name(&self) -> Option<&str> {
        self.remembered.as_deref()
    }

    /// Choice the name form will be submitted under.
    pub fn pending_choice(&self) -> &AuthChoice {
        &self.pending
    }

    pub fn choose_email(&mut self) -> LoginOutcome {
        self.pending = AuthChoice::Email;
        self.ask_for_name()
    }

    /// Reuse a stored name when the re-auth policy allows it, else ask.
    pub fn choose_anonymous(&mut self) -> LoginOutcome {
        self.pending = AuthChoice::Anonymous;
        let Some(name) = self.prefs.display_name() else {
            return self.ask_for_name();
        };
        let reusable = match self.reauth {
            ReauthPolicy::TrustStored => true,
            ReauthPolicy::Revalidate => self.pattern.check(&name).is_ok(),
        };
        if !reusable {
            log::info!("stored display name no longer valid, asking again");
            return self.ask_for_name();
        }
        self.prefs.save_choice(&AuthChoice::Anonymous);
        LoginOutcome::Redirect(self.destination())
    }

    /// Record a third-party provider and hand over to its sign-in URL, or
    /// to the post-auth destination when none is given.
    pub fn choose_provider(&mut self, provider: &str, sign_in_url: Option<&str>) -> LoginOutcome {
        let choice = AuthChoice::parse(provider)
            .unwrap_or_else(|| AuthChoice::Provider(DEFAULT_PROVIDER.to_owned()));
        self.prefs.save_choice(&choice);
        self.pending = choice;
        match sign_in_url.map(str::trim).filter(|url| !url.is_empty()) {
            Some(url) => LoginOutcome::Redirect(url.to_owned()),
            None => LoginOutcome::Redirect(self.destination()),
        }
    }

    /// Validate, normalize and persist the entered name under the pending
    /// choice. Rejected input leaves storage untouched.
    pub fn submit_name(&mut self, raw: &str) -> LoginOutcome {
        match self.pattern.check(raw) {
            Ok(name) => {
                self.prefs.save(&name, &self.pending);
                self.remembered = Some(name);
                LoginOutcome::Redirect(self.destination())
            }
            Err(e) => {
                log::debug!("display name rejected: {e}");
                LoginOutcome::Rejected(e)
            }
        }
    }

    fn ask_for_name(&self) -> LoginOutcome {
        LoginOutcome::AskForName {
            prefill: self.remembered.clone().or_else(|| self.prefs.display_name()),
        }
    }

    fn destination(&self) -> String {
        post_auth_destination(&self.prefs, &self.default_landing)
    }
}

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;

    use web_sys::{Element, Event, HtmlFormElement, HtmlInputElement};

    use super::{DEFAULT_PROVIDER, LoginFlow, LoginOutcome, ids};
    use crate::config::{PageConfig, routes};
    use crate::error::ClientError;
    use crate::routing::browser::{BrowserLocation, BrowserRouter, DomPanelHost, install_hashchange};
    use crate::routing::{ClientRouter, ROUTE_PAGE_LOADED_EVENT, RouteTable};
    use crate::util::dom;
    use crate::util::redirect::redirect_to;
    use crate::util::storage::BrowserStore;

    type Flow = Rc<RefCell<LoginFlow<BrowserStore>>>;

    #[derive(Clone)]
    struct LoginView {
        router: Rc<BrowserRouter>,
        input: HtmlInputElement,
    }

    impl LoginView {
        fn apply(&self, outcome: LoginOutcome) {
            match outcome {
                LoginOutcome::Redirect(url) => redirect_to(&url),
                LoginOutcome::AskForName { prefill } => {
                    // Already on the name panel: no activation event will follow.
                    if !self.router.navigate(routes::SIGN_IN) {
                        self.prefill(prefill.as_deref());
                    }
                }
                LoginOutcome::Rejected(err) => {
                    self.input.set_custom_validity(&err.to_string());
                    self.input.report_validity();
                }
            }
        }

        fn prefill(&self, name: Option<&str>) {
            let Some(name) = name else {
                return;
            };
            if self.input.value().trim().is_empty() {
                self.input.set_value(name);
            }
            let _ = self.input.focus();
        }
    }

    pub(super) fn mount() -> Result<(), ClientError> {
        let window = dom::window()?;
        let document = dom::document()?;
        let config = dom::read_page_config(&document, PageConfig::login())?;

        let input: HtmlInputElement = dom::require(&document, ids::USERNAME_INPUT, "input element")?;
        let form: HtmlFormElement = dom::require(&document, ids::LOGIN_FORM, "form")?;
        let email_btn: Option<Element> = dom::optional(&document, ids::EMAIL_BUTTON, "element")?;
        let anon_btn: Option<Element> = dom::optional(&document, ids::ANON_BUTTON, "element")?;
        let provider_btn: Option<Element> = dom::optional(&document, ids::PROVIDER, "element")?;

        let router = Rc::new(ClientRouter::new(
            RouteTable::new(config.routes.clone())?,
            DomPanelHost::new(document.clone()),
            BrowserLocation::new(window.clone()),
        ));
        let mut flow = LoginFlow::new(&config, BrowserStore::local()?)?;
        flow.on_load();
        let flow: Flow = Rc::new(RefCell::new(flow));
        let view = LoginView { router: Rc::clone(&router), input: input.clone() };

        if let Some(panel) = router
            .table()
            .get(routes::SIGN_IN)
            .and_then(|route| document.get_element_by_id(&route.panel_id))
        {
            let flow = Rc::clone(&flow);
            let view = view.clone();
            dom::on(&panel, ROUTE_PAGE_LOADED_EVENT, move |_| {
                let name = flow.borrow().remembered_name().map(str::to_owned);
                view.prefill(name.as_deref());
            })?;
        }

        if let Some(btn) = email_btn {
            let flow = Rc::clone(&flow);
            let view = view.clone();
            dom::on(&btn, "click", move |ev: Event| {
                ev.prevent_default();
                let outcome = flow.borrow_mut().choose_email();
                view.apply(outcome);
            })?;
        }

        if let Some(btn) = anon_btn {
            let flow = Rc::clone(&flow);
            let view = view.clone();
            dom::on(&btn, "click", move |ev: Event| {
                ev.prevent_default();
                let outcome = flow.borrow_mut().choose_anonymous();
                view.apply(outcome);
            })?;
        }

        if let Some(btn) = provider_btn {
            let flow = Rc::clone(&flow);
            let view = view.clone();
            let target = btn.clone();
            dom::on(&btn, "click", move |ev: Event| {
                ev.prevent_default();
                let provider = target
                    .get_attribute("data-provider")
                    .unwrap_or_else(|| DEFAULT_PROVIDER.to_owned());
                let url = target.get_attribute("data-href").or_else(|| target.get_attribute("href"));
                let outcome = flow.borrow_mut().choose_provider(&provider, url.as_deref());
                view.apply(outcome);
            })?;
        }

        {
            let input_for_clear = input.clone();
            dom::on(&input, "input", move |_| input_for_clear.set_custom_validity(""))?;
        }

        {
            let flow = Rc::clone(&flow);
            let view = view.clone();
            dom::on(&form, "submit", move |ev: Event| {
                ev.prevent_default();
                let raw = view.input.value();
                let outcome = flow.borrow_mut().submit_name(&raw);
                view.apply(outcome);
            })?;
        }

        install_hashchange(&window, Rc::clone(&router))?;
        router.dispatch();
        log::info!("login page mounted");
        Ok(())
    }
}

/// Attach the login flow to the current page.
///
/// # Errors
///
/// Returns a [`ClientError`] when a required hook is missing, the page
/// configuration is invalid, or storage is unavailable.
#[cfg(feature = "hydrate")]
pub fn mount() -> Result<(), ClientError> {
    browser::mount()
}
