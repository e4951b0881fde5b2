use crate::{
    components::common::{Button, ButtonVariant},
    state::session::SessionError,
};
use leptos::{ev::MouseEvent, *};

#[component]
pub fn SessionErrorPanel(
    error: SessionError,
    #[prop(optional, into)] on_retry: Option<Callback<()>>,
) -> impl IntoView {
    let detail = error.to_string();
    view! {
        <div class="max-w-lg mx-auto my-12 bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-4 rounded space-y-3">
            <p class="font-semibold">"We could not load your session."</p>
            <p class="text-sm">{detail}</p>
            {on_retry.map(|retry| view! {
                <Button variant=ButtonVariant::Secondary on_click=Callback::new(move |_: MouseEvent| retry.call(()))>
                    "Try again"
                </Button>
            })}
        </div>
    }
}
