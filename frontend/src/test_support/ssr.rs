use super::helpers::with_runtime;
use crate::state::session::Session;
use leptos::*;

/// Renders `view` to HTML on the host. Resources are not fetched.
pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let html = with_runtime(|| view().into_view().render_to_string().to_string());
    leptos_reactive::suppress_resource_load(false);
    html
}

/// Same as [`render_to_string`] with `session` provided as the session context.
pub fn render_with_session<F, N>(session: Session, view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    render_to_string(move || {
        super::helpers::provide_session(session);
        view()
    })
}
