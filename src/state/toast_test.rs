use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Success, "saved");
    let b = state.push(ToastKind::Error, "failed");
    assert!(b > a);
    assert_eq!(state.entries().len(), 2);
}

#[test]
fn dismiss_removes_only_the_target() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Success, "one");
    let b = state.push(ToastKind::Success, "two");
    state.dismiss(a);
    assert_eq!(state.entries().len(), 1);
    assert_eq!(state.entries()[0].id, b);
}

#[test]
fn dismiss_unknown_id_is_a_no_op() {
    let mut state = ToastState::default();
    state.push(ToastKind::Error, "kept");
    state.dismiss(99);
    assert_eq!(state.entries().len(), 1);
}
