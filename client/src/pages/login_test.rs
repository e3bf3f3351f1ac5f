use super::*;

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(
        validate_login_input("  ada@inkly.dev ", "secret"),
        Ok(("ada@inkly.dev".to_owned(), "secret".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("", "secret"), Err("Enter your email and password."));
    assert_eq!(validate_login_input("ada@inkly.dev", ""), Err("Enter your email and password."));
}

#[test]
fn validate_login_input_rejects_malformed_email() {
    assert_eq!(validate_login_input("ada", "secret"), Err("Enter a valid email address."));
}

#[test]
fn validate_login_input_keeps_password_whitespace() {
    assert_eq!(
        validate_login_input("a@b.c", " pass "),
        Ok(("a@b.c".to_owned(), " pass ".to_owned()))
    );
}

#[test]
fn login_failed_message_maps_unauthorized() {
    let err = FetchError::Status {
        status: 401,
        message: "Unauthorized".to_owned(),
    };
    assert_eq!(login_failed_message(&err), "Invalid email or password.");
}

#[test]
fn login_failed_message_includes_other_errors() {
    let err = FetchError::Transport("offline".to_owned());
    assert_eq!(login_failed_message(&err), "Sign-in failed: network error: offline");
}
