use crate::utils::redirect::{sanitize_return_target, RETURN_PARAM, SIGNED_OUT_PARAM};
use leptos::*;
use leptos_router::use_query_map;

pub mod components;
pub mod utils;

mod panel;

pub use panel::LoginPanel;

#[component]
pub fn LoginPage() -> impl IntoView {
    let query = use_query_map();
    let (return_to, signed_out) = query.with_untracked(|params| {
        (
            params
                .get(RETURN_PARAM)
                .and_then(|value| sanitize_return_target(value)),
            params.get(SIGNED_OUT_PARAM).is_some(),
        )
    });

    match return_to {
        Some(target) => {
            view! { <LoginPanel return_to=target signed_out=signed_out /> }.into_view()
        }
        None => view! { <LoginPanel signed_out=signed_out /> }.into_view(),
    }
}
