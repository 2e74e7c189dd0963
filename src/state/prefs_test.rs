use super::*;
use crate::util::storage::MemoryStore;

// =============================================================
// AuthChoice
// =============================================================

#[test]
fn auth_choice_round_trips_known_names() {
    for choice in [AuthChoice::Email, AuthChoice::Anonymous, AuthChoice::Arena] {
        assert_eq!(AuthChoice::parse(choice.as_str()), Some(choice));
    }
}

#[test]
fn auth_choice_unknown_name_is_provider() {
    assert_eq!(
        AuthChoice::parse("google"),
        Some(AuthChoice::Provider("google".to_owned()))
    );
    assert_eq!(AuthChoice::Provider("google".to_owned()).to_string(), "google");
}

#[test]
fn auth_choice_empty_is_none() {
    assert_eq!(AuthChoice::parse("  "), None);
}

// =============================================================
// PreferenceStore
// =============================================================

#[test]
fn begin_login_visit_clears_choice_and_token_but_keeps_name() {
    let prefs = PreferenceStore::new(MemoryStore::with_entries([
        (AUTH_CHOICE_KEY, "anonymous"),
        (JWT_KEY, "token"),
        (DISPLAY_NAME_KEY, "Ada"),
        (REQUEST_URI_KEY, "/foo"),
    ]));
    assert_eq!(prefs.begin_login_visit().as_deref(), Some("Ada"));
    assert!(prefs.store().get(AUTH_CHOICE_KEY).is_none());
    assert!(prefs.store().get(JWT_KEY).is_none());
    assert_eq!(prefs.store().get(REQUEST_URI_KEY).as_deref(), Some("/foo"));
}

#[test]
fn begin_login_visit_without_name() {
    let prefs = PreferenceStore::new(MemoryStore::new());
    assert!(prefs.begin_login_visit().is_none());
}

#[test]
fn blank_stored_name_counts_as_missing() {
    let prefs = PreferenceStore::new(MemoryStore::with_entries([(DISPLAY_NAME_KEY, "  ")]));
    assert!(prefs.display_name().is_none());
}

#[test]
fn save_persists_name_and_choice() {
    let prefs = PreferenceStore::new(MemoryStore::new());
    prefs.save("John Doe", &AuthChoice::Email);
    assert_eq!(
        prefs.load(),
        AuthPreference {
            display_name: Some("John Doe".to_owned()),
            auth_choice: Some(AuthChoice::Email),
        }
    );
}

#[test]
fn save_choice_overwrites_previous_choice() {
    let prefs = PreferenceStore::new(MemoryStore::with_entries([(DISPLAY_NAME_KEY, "Ada")]));
    prefs.save_choice(&AuthChoice::Email);
    prefs.save_choice(&AuthChoice::Provider("github".to_owned()));
    assert_eq!(prefs.store().get(AUTH_CHOICE_KEY).as_deref(), Some("github"));
    assert_eq!(prefs.display_name().as_deref(), Some("Ada"));
}

#[test]
fn take_request_uri_is_one_time() {
    let prefs = PreferenceStore::new(MemoryStore::with_entries([(REQUEST_URI_KEY, "/foo")]));
    assert_eq!(prefs.take_request_uri().as_deref(), Some("/foo"));
    assert!(prefs.take_request_uri().is_none());
    assert!(prefs.store().is_empty());
}

#[test]
fn take_request_uri_drops_blank_value() {
    let prefs = PreferenceStore::new(MemoryStore::with_entries([(REQUEST_URI_KEY, " ")]));
    assert!(prefs.take_request_uri().is_none());
    assert!(prefs.store().is_empty());
}
