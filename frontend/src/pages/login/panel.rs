use crate::{
    api::LoginRequest,
    pages::login::{components::form::LoginForm, utils},
    state::session::{use_login_action, use_session},
    utils::redirect,
};
use leptos::{ev::SubmitEvent, Callback, *};

#[component]
pub fn LoginPanel(
    /// Sanitized location to return to after signing in.
    #[prop(optional)]
    return_to: Option<String>,
    #[prop(optional)] signed_out: bool,
) -> impl IntoView {
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);
    let (session, _) = use_session();
    let return_to = store_value(return_to);

    let login_action = use_login_action();
    let pending = login_action.pending();

    create_effect(move |_| {
        let Some(target) = session.with(|state| {
            return_to.with_value(|target| utils::signed_in_destination(state, target.as_deref()))
        }) else {
            return;
        };
        redirect::navigate(&target);
    });

    create_effect(move |_| {
        if let Some(Err(err)) = login_action.value().get() {
            set_password.set(String::new());
            set_error.set(Some(err.error));
        }
    });

    let handle_submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let raw_email = email.get_untracked();
        let raw_password = password.get_untracked();

        if let Err(msg) = utils::validate_credentials(&raw_email, &raw_password) {
            set_error.set(Some(msg));
            return;
        }
        set_error.set(None);

        login_action.dispatch(LoginRequest {
            email: utils::normalize_email(&raw_email),
            password: raw_password,
        });
    });

    let email_input = Callback::new(move |value: String| set_email.set(value));
    let password_input = Callback::new(move |value: String| set_password.set(value));

    view! {
        <LoginForm
            email=email
            password=password
            error=error
            pending=pending.into()
            signed_out=signed_out
            on_email_input=email_input
            on_password_input=password_input
            on_submit=handle_submit
        />
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::session::Session;
    use crate::test_support::ssr::render_with_session;

    #[test]
    fn renders_form_for_visitor() {
        let html = render_with_session(Session::Anonymous, || {
            view! { <LoginPanel return_to="/parent/fees".to_string() /> }
        });
        assert!(html.contains("Sign in to KidsLink"));
        assert!(!html.contains("You have been signed out."));
    }

    #[test]
    fn shows_notice_after_sign_out() {
        let html = render_with_session(Session::Anonymous, || {
            view! { <LoginPanel signed_out=true /> }
        });
        assert!(html.contains("You have been signed out."));
    }
}
