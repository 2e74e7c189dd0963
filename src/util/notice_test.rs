use super::*;

#[test]
fn clone_success_reports_object_count() {
    let notice = Notice::clone_succeeded(12);
    assert_eq!(notice.kind, NoticeKind::Success);
    assert_eq!(notice.title, "Clone success!");
    assert_eq!(notice.body, "12 objects cloned into new scene");
}

#[test]
fn clone_success_singular_object() {
    assert_eq!(Notice::clone_succeeded(1).body, "1 object cloned into new scene");
}

#[test]
fn clone_failure_is_a_warning() {
    let notice = Notice::clone_failed();
    assert_eq!(notice.kind, NoticeKind::Warning);
    assert_eq!(notice.title, "Scene Clone Failed!");
}

#[test]
fn kinds_map_to_distinct_classes() {
    assert_eq!(NoticeKind::Success.class_name(), "toast-success");
    assert_eq!(NoticeKind::Warning.class_name(), "toast-warning");
    assert_eq!(NoticeKind::Error.class_name(), "toast-error");
}
