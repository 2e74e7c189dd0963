use super::*;

#[test]
fn delete_prompt_names_the_scene() {
    assert_eq!(delete_prompt("alice/lab"), "Are you sure you want to delete alice/lab?");
}

#[test]
fn blocked_notice_skips_duplicate_clicks() {
    assert_eq!(blocked_notice_text(&CloneBlocked::InFlight), None);
    assert_eq!(blocked_notice_text(&CloneBlocked::AlreadyCreated), None);
}

#[test]
fn blocked_notice_explains_missing_input() {
    assert_eq!(
        blocked_notice_text(&CloneBlocked::EmptyName).as_deref(),
        Some("Enter a name for the new scene")
    );
    assert_eq!(blocked_notice_text(&CloneBlocked::NotSignedIn).as_deref(), Some("Not signed in"));
    assert_eq!(
        blocked_notice_text(&CloneBlocked::NoSource).as_deref(),
        Some("No valid source scene selected")
    );
}

#[test]
fn hook_ids_match_markup_contract() {
    assert_eq!(ids::USER_SCENE_INPUT, "userSceneInput");
    assert_eq!(ids::PUBLIC_SCENE_DATALIST, "publicSceneDatalist");
    assert_eq!(ids::DO_CLONE_SCENE, "doCloneSceneBtn");
}
