use super::*;

fn user(role: Role) -> User {
    User {
        id: Some("u1".to_owned()),
        email: "ada@inkly.dev".to_owned(),
        name: Some("Ada".to_owned()),
        role,
    }
}

#[test]
fn pending_session_is_loading_and_untrusted() {
    let session = Session::pending();
    assert!(session.loading());
    assert!(!session.is_authenticated());
    assert_eq!(session.user(), None);
    assert_eq!(session.role(), None);
}

#[test]
fn signed_in_session_exposes_user_and_role() {
    let session = Session::signed_in(user(Role::Writer));
    assert!(!session.loading());
    assert!(session.is_authenticated());
    assert_eq!(session.role(), Some(Role::Writer));
    assert_eq!(session.user().map(User::display_name), Some("Ada"));
}

#[test]
fn authenticated_without_profile_has_no_role() {
    let session = Session::authenticated_without_profile();
    assert!(session.is_authenticated());
    assert_eq!(session.role(), None);
}

#[test]
fn signed_out_session_is_resolved_and_anonymous() {
    let session = Session::signed_out();
    assert!(!session.loading());
    assert!(!session.is_authenticated());
    assert_eq!(session.status(), SessionStatus::Anonymous);
}

#[test]
fn default_session_is_pending() {
    assert_eq!(Session::default(), Session::pending());
}

#[test]
fn restore_step_applies_reply_while_pending() {
    let pending = Session::pending();
    assert_eq!(
        pending.restore_step(Ok(Some(user(Role::Writer)))),
        RestoreStep::Resolve(Some(user(Role::Writer)))
    );
    let expired = FetchError::Status {
        status: 401,
        message: "expired".to_owned(),
    };
    assert_eq!(pending.restore_step(Err(expired)), RestoreStep::SignOut { clear_token: true });
    assert_eq!(
        pending.restore_step(Err(FetchError::Transport("offline".to_owned()))),
        RestoreStep::SignOut { clear_token: false }
    );
}

#[test]
fn restore_step_ignores_late_reply_after_login() {
    let fresh_login = Session::signed_in(user(Role::Writer));
    let expired = FetchError::Status {
        status: 401,
        message: "expired".to_owned(),
    };
    assert_eq!(fresh_login.restore_step(Err(expired)), RestoreStep::Ignore);
    assert_eq!(fresh_login.restore_step(Ok(Some(user(Role::Reader)))), RestoreStep::Ignore);
    assert_eq!(Session::signed_out().restore_step(Ok(None)), RestoreStep::Ignore);
}
