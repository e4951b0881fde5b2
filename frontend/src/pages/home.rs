use crate::{
    api::ApiClient,
    components::{error::SessionErrorPanel, layout::LoadingSpinner},
    routes::paths,
    state::session::{refresh_session, use_session, Session},
    utils::redirect,
};
use leptos::*;

/// Where `/` forwards to, once the session is known.
pub fn home_destination(session: &Session) -> Option<String> {
    match session {
        Session::Authenticated(user) => Some(user.role.home_path().to_string()),
        Session::Anonymous => Some(paths::LOGIN.to_string()),
        Session::Loading | Session::Failed(_) => None,
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let (session, set_session) = use_session();

    create_effect(move |_| {
        if let Some(target) = session.with(home_destination) {
            redirect::navigate(&target);
        }
    });

    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let on_retry = Callback::new(move |_: ()| {
        spawn_local(refresh_session(api.clone(), set_session));
    });

    move || match session.get() {
        Session::Failed(error) => {
            view! { <SessionErrorPanel error=error on_retry=on_retry /> }.into_view()
        }
        _ => view! { <LoadingSpinner /> }.into_view(),
    }
}
