use super::*;

fn origin() -> PageOrigin {
    PageOrigin::new("https:", "arena.example.org")
}

const CANDIDATES: [&str; 3] = ["alice/lobby", "alice/lab", "public/demo"];

#[test]
fn scene_url_joins_protocol_host_and_value() {
    assert_eq!(
        scene_url("https:", "arena.example.org", "alice/lab"),
        "https://arena.example.org/alice/lab"
    );
    assert_eq!(origin().scene_url("x"), "https://arena.example.org/x");
}

#[test]
fn exact_candidate_is_valid_and_sets_preview_url() {
    let mut selection = SceneSelection::new(NO_VALID_SCENE);
    let change = selection.check("alice/lab", CANDIDATES, &origin());
    assert!(change.is_valid());
    assert_eq!(change.selected.as_deref(), Some("alice/lab"));
    assert_eq!(change.url_field, "https://arena.example.org/alice/lab");
    assert_eq!(selection.selected(), Some("alice/lab"));
}

#[test]
fn value_missing_from_candidates_is_invalid() {
    let mut selection = SceneSelection::new(NO_VALID_SCENE);
    let change = selection.check("bob/lab", CANDIDATES, &origin());
    assert!(!change.is_valid());
    assert_eq!(change.url_field, NO_VALID_SCENE);
    assert_eq!(selection.selected(), None);
}

#[test]
fn partial_match_clears_previous_selection() {
    let mut selection = SceneSelection::new(NO_VALID_SCENE);
    selection.check("alice/lab", CANDIDATES, &origin());
    let change = selection.check("alice/la", CANDIDATES, &origin());
    assert!(!change.is_valid());
    assert_eq!(selection.selected(), None);
}

#[test]
fn empty_value_is_invalid_even_with_empty_candidate() {
    let mut selection = SceneSelection::new("");
    let change = selection.check("", ["", "alice/lab"], &origin());
    assert!(!change.is_valid());
    assert_eq!(change.url_field, "");
}

#[test]
fn matching_is_case_sensitive() {
    let mut selection = SceneSelection::new("");
    assert!(!selection.check("Alice/Lab", CANDIDATES, &origin()).is_valid());
}

#[test]
fn owned_candidate_lists_are_accepted() {
    let mut selection = SceneSelection::new("");
    let candidates: Vec<String> = CANDIDATES.iter().map(|s| (*s).to_owned()).collect();
    assert!(selection.check("public/demo", &candidates, &origin()).is_valid());
}

#[test]
fn clear_drops_selection() {
    let mut selection = SceneSelection::new("");
    selection.check("public/demo", CANDIDATES, &origin());
    selection.clear();
    assert!(selection.selected().is_none());
}
