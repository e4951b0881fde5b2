use crate::{components::cards::NavCard, routes::RouteEntry};
use leptos::*;

#[component]
pub fn ShortcutGrid(entries: Vec<&'static RouteEntry>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 gap-5 sm:grid-cols-2 lg:grid-cols-3">
            {entries
                .into_iter()
                .map(|entry| view! { <NavCard entry=entry /> })
                .collect_view()}
        </div>
    }
}
