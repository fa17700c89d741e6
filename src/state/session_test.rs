use super::*;

fn verify_for(state: &mut SessionState, path: &str) -> String {
    match state.enter_route(path) {
        GateAction::Verify { path } => path,
        GateAction::None => panic!("expected a verification for {path}"),
    }
}

// =============================================================
// Initial state and public entry route
// =============================================================

#[test]
fn starts_unknown_with_no_checked_path() {
    let state = SessionState::default();
    assert_eq!(state.phase(), Phase::Unknown);
    assert!(state.checked_for_path().is_none());
}

#[test]
fn login_route_is_unauthenticated_without_network() {
    let mut state = SessionState::default();
    assert_eq!(state.enter_route(LOGIN_PATH), GateAction::None);
    assert_eq!(state.phase(), Phase::Unauthenticated);
    assert!(state.checked_for_path().is_none());
}

#[test]
fn login_route_clears_previously_checked_path() {
    let mut state = SessionState::default();
    let path = verify_for(&mut state, "/admin/pending");
    state.settle_verify(&path, true);
    assert_eq!(state.checked_for_path(), Some("/admin/pending"));

    state.enter_route(LOGIN_PATH);
    assert!(state.checked_for_path().is_none());
}

// =============================================================
// Protected entry: verify exactly once per path-entry
// =============================================================

#[test]
fn protected_entry_enters_verifying() {
    let mut state = SessionState::default();
    let path = verify_for(&mut state, "/admin/approved");
    assert_eq!(path, "/admin/approved");
    assert_eq!(state.phase(), Phase::Verifying);
}

#[test]
fn repeated_event_for_same_path_does_not_reissue() {
    let mut state = SessionState::default();
    verify_for(&mut state, "/admin/approved");
    assert_eq!(state.enter_route("/admin/approved"), GateAction::None);
    assert_eq!(state.phase(), Phase::Verifying);
}

#[test]
fn checked_path_reentry_skips_verification() {
    let mut state = SessionState::default();
    let path = verify_for(&mut state, "/admin/approved");
    state.settle_verify(&path, true);

    assert_eq!(state.enter_route("/admin/approved"), GateAction::None);
    assert_eq!(state.phase(), Phase::Authenticated);
}

#[test]
fn different_path_reverifies() {
    let mut state = SessionState::default();
    let path = verify_for(&mut state, "/admin/approved");
    state.settle_verify(&path, true);

    let path = verify_for(&mut state, "/admin/pending");
    assert_eq!(path, "/admin/pending");
    assert_eq!(state.phase(), Phase::Verifying);
}

// =============================================================
// Settlement
// =============================================================

#[test]
fn settle_success_authenticates_and_marks_checked() {
    let mut state = SessionState::default();
    let path = verify_for(&mut state, "/admin/approved");
    state.settle_verify(&path, true);
    assert_eq!(state.phase(), Phase::Authenticated);
    assert_eq!(state.checked_for_path(), Some("/admin/approved"));
}

#[test]
fn settle_failure_unauthenticates_and_marks_checked() {
    let mut state = SessionState::default();
    let path = verify_for(&mut state, "/admin/approved");
    state.settle_verify(&path, false);
    assert_eq!(state.phase(), Phase::Unauthenticated);
    assert_eq!(state.checked_for_path(), Some("/admin/approved"));
}

#[test]
fn stale_settlement_for_abandoned_path_is_discarded() {
    let mut state = SessionState::default();
    let first = verify_for(&mut state, "/admin/approved");
    let second = verify_for(&mut state, "/admin/pending");

    // Slow response for the abandoned path arrives after the navigation.
    state.settle_verify(&first, true);
    assert_eq!(state.phase(), Phase::Verifying);
    assert!(state.checked_for_path().is_none());

    state.settle_verify(&second, true);
    assert_eq!(state.phase(), Phase::Authenticated);
    assert_eq!(state.checked_for_path(), Some("/admin/pending"));
}

#[test]
fn bouncing_back_while_stale_verify_in_flight_reverifies() {
    let mut state = SessionState::default();
    let first = verify_for(&mut state, "/admin/approved");
    verify_for(&mut state, "/admin/pending");
    verify_for(&mut state, "/admin/approved");

    // The first request for this path settles after being superseded
    // twice; the path matches again, so the result applies.
    state.settle_verify(&first, true);
    assert_eq!(state.phase(), Phase::Authenticated);
}

// =============================================================
// Login / logout
// =============================================================

#[test]
fn login_success_forces_reverification_on_next_navigation() {
    let mut state = SessionState::default();
    state.enter_route(LOGIN_PATH);
    state.login_succeeded();
    assert_eq!(state.phase(), Phase::Authenticated);
    assert!(state.checked_for_path().is_none());

    // Never trust the login response alone: "/" still verifies.
    let path = verify_for(&mut state, "/");
    assert_eq!(path, "/");
}

#[test]
fn login_failure_stays_unauthenticated() {
    let mut state = SessionState::default();
    state.enter_route(LOGIN_PATH);
    state.login_failed();
    assert_eq!(state.phase(), Phase::Unauthenticated);
    assert!(state.checked_for_path().is_none());
}

#[test]
fn logout_resets_even_from_authenticated() {
    let mut state = SessionState::default();
    let path = verify_for(&mut state, "/");
    state.settle_verify(&path, true);

    state.logout();
    assert_eq!(state.phase(), Phase::Unauthenticated);
    assert!(state.checked_for_path().is_none());
}

// =============================================================
// End-to-end phase sequences
// =============================================================

#[test]
fn direct_load_with_valid_cookie() {
    let mut state = SessionState::default();
    assert_eq!(state.phase(), Phase::Unknown);

    let path = verify_for(&mut state, "/admin/approved");
    assert_eq!(state.phase(), Phase::Verifying);

    state.settle_verify(&path, true);
    assert_eq!(state.phase(), Phase::Authenticated);
}

#[test]
fn direct_load_with_invalid_cookie() {
    let mut state = SessionState::default();
    let path = verify_for(&mut state, "/admin/approved");
    state.settle_verify(&path, false);
    assert_eq!(state.phase(), Phase::Unauthenticated);
}
