use super::*;

fn origin() -> PageOrigin {
    PageOrigin::new("https:", "arena.example.org")
}

fn ready_draft() -> CloneDraft {
    let mut draft = CloneDraft::reset("public/demo");
    draft.set_new_name("my-demo");
    draft
}

// =============================================================
// SceneRef
// =============================================================

#[test]
fn scene_ref_splits_at_first_slash() {
    let scene = SceneRef::parse("alice/lab/v2").unwrap();
    assert_eq!(scene.namespace, "alice");
    assert_eq!(scene.scene_id, "lab/v2");
    assert_eq!(scene.to_string(), "alice/lab/v2");
}

#[test]
fn scene_ref_requires_both_halves() {
    assert!(SceneRef::parse("lobby").is_none());
    assert!(SceneRef::parse("/lobby").is_none());
    assert!(SceneRef::parse("alice/").is_none());
    assert!(SceneRef::parse("").is_none());
}

// =============================================================
// Editing
// =============================================================

#[test]
fn reset_starts_with_empty_name() {
    let draft = CloneDraft::reset("alice/lab");
    assert_eq!(draft.source(), "alice/lab");
    assert_eq!(draft.new_name(), "");
    assert_eq!(draft.status(), &CloneStatus::Editing);
    assert!(!draft.can_submit());
}

#[test]
fn non_empty_name_enables_submit() {
    let mut draft = CloneDraft::reset("alice/lab");
    assert!(draft.set_new_name("copy"));
    assert!(!draft.set_new_name("   "));
}

// =============================================================
// Submission
// =============================================================

#[test]
fn begin_submit_builds_request_and_goes_pending() {
    let mut draft = ready_draft();
    let submission = draft.begin_submit(Some("bob")).unwrap();
    assert_eq!(submission.username, "bob");
    assert_eq!(submission.new_name, "my-demo");
    assert_eq!(submission.request, CloneRequest::new("public", "demo"));
    assert_eq!(draft.status(), &CloneStatus::Pending);
    assert_eq!(draft.target_scene(), "bob/my-demo");
    assert!(!draft.is_editable());
}

#[test]
fn second_submit_while_pending_is_blocked() {
    let mut draft = ready_draft();
    draft.begin_submit(Some("bob")).unwrap();
    assert_eq!(draft.begin_submit(Some("bob")), Err(CloneBlocked::InFlight));
}

#[test]
fn submit_requires_source_name_and_user() {
    let mut no_source = CloneDraft::reset("");
    no_source.set_new_name("x");
    assert_eq!(no_source.begin_submit(Some("bob")), Err(CloneBlocked::NoSource));

    let mut no_name = CloneDraft::reset("public/demo");
    assert_eq!(no_name.begin_submit(Some("bob")), Err(CloneBlocked::EmptyName));

    let mut no_user = ready_draft();
    assert_eq!(no_user.begin_submit(None), Err(CloneBlocked::NotSignedIn));
    assert_eq!(no_user.begin_submit(Some(" ")), Err(CloneBlocked::NotSignedIn));
    assert_eq!(no_user.status(), &CloneStatus::Editing);
}

#[test]
fn success_locks_the_form_and_sets_url() {
    let mut draft = ready_draft();
    let sent = draft.begin_submit(Some("bob")).unwrap();
    let status = draft
        .complete(sent.generation, Ok(CloneResponse { objects_cloned: 5 }), &origin())
        .cloned()
        .unwrap();
    assert_eq!(
        status,
        CloneStatus::Created {
            url: "https://arena.example.org/bob/my-demo".to_owned(),
            objects_cloned: 5,
        }
    );
    assert!(!draft.is_editable());
    assert!(!draft.set_new_name("other"));
    assert_eq!(draft.new_name(), "my-demo");
    assert_eq!(draft.begin_submit(Some("bob")), Err(CloneBlocked::AlreadyCreated));
}

#[test]
fn failure_keeps_the_form_editable_for_retry() {
    let mut draft = ready_draft();
    let sent = draft.begin_submit(Some("bob")).unwrap();
    draft.complete(sent.generation, Err("clone request failed: 500".to_owned()), &origin());
    assert_eq!(draft.status(), &CloneStatus::Failed("clone request failed: 500".to_owned()));
    assert!(draft.is_editable());
    assert!(draft.set_new_name("my-demo-2"));
    let retry = draft.begin_submit(Some("bob")).unwrap();
    assert_eq!(retry.new_name, "my-demo-2");
}

#[test]
fn completion_without_a_pending_request_is_ignored() {
    let mut draft = ready_draft();
    let generation = draft.generation();
    assert!(draft.complete(generation, Ok(CloneResponse { objects_cloned: 2 }), &origin()).is_none());
    assert_eq!(draft.status(), &CloneStatus::Editing);

    let sent = draft.begin_submit(Some("bob")).unwrap();
    draft.complete(sent.generation, Ok(CloneResponse { objects_cloned: 2 }), &origin());
    assert!(draft.complete(sent.generation, Err("late".to_owned()), &origin()).is_none());
    assert!(matches!(draft.status(), CloneStatus::Created { objects_cloned: 2, .. }));
}

#[test]
fn replace_bumps_generation_and_clears_the_form() {
    let mut draft = ready_draft();
    draft.begin_submit(Some("bob")).unwrap();
    let next = draft.replace("alice/lab");
    assert_eq!(next.generation(), draft.generation() + 1);
    assert_eq!(next.source(), "alice/lab");
    assert_eq!(next.new_name(), "");
    assert_eq!(next.status(), &CloneStatus::Editing);
}
