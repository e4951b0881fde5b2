use crate::{state::session::Session, utils::redirect};

/// Where a signed-in user leaves the sign-in page for; `None` until signed in.
pub fn signed_in_destination(session: &Session, return_to: Option<&str>) -> Option<String> {
    let role = session.role()?;
    Some(redirect::post_login_destination(return_to, role))
}

pub fn validate_credentials(email: &str, password: &str) -> Result<(), String> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Enter your email address".into());
    }
    if !email.contains('@') {
        return Err("Enter a valid email address".into());
    }
    if password.is_empty() {
        return Err("Enter your password".into());
    }
    Ok(())
}

pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{role::Role, session::SessionError};
    use crate::test_support::helpers::signed_in;

    #[test]
    fn requires_email_and_password() {
        assert_eq!(
            validate_credentials("  ", "secret"),
            Err("Enter your email address".into())
        );
        assert_eq!(
            validate_credentials("ama", "secret"),
            Err("Enter a valid email address".into())
        );
        assert_eq!(
            validate_credentials("ama@kidslink.test", ""),
            Err("Enter your password".into())
        );
        assert!(validate_credentials(" ama@kidslink.test ", "secret").is_ok());
    }

    #[test]
    fn stays_on_sign_in_until_authenticated() {
        for session in [
            Session::Loading,
            Session::Anonymous,
            Session::Failed(SessionError::NoProvider),
        ] {
            assert_eq!(signed_in_destination(&session, Some("/parent/fees")), None);
        }
    }

    #[test]
    fn signed_in_user_returns_to_requested_page_or_home() {
        let parent = signed_in(Role::Parent);
        assert_eq!(
            signed_in_destination(&parent, Some("/parent/fees")).as_deref(),
            Some("/parent/fees")
        );
        assert_eq!(
            signed_in_destination(&parent, None).as_deref(),
            Some(Role::Parent.home_path())
        );
        assert_eq!(
            signed_in_destination(&parent, Some("/\t/evil.test")).as_deref(),
            Some(Role::Parent.home_path())
        );
    }

    #[test]
    fn email_is_trimmed_and_lowercased() {
        assert_eq!(normalize_email("  Ama@KidsLink.Test "), "ama@kidslink.test");
    }
}
