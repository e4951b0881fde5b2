use crate::routes::RouteEntry;
use leptos::*;

/// Shortcut tile linking to a route.
#[component]
pub fn NavCard(entry: &'static RouteEntry) -> impl IntoView {
    view! {
        <a
            href=entry.path
            class="block bg-surface-elevated overflow-hidden shadow rounded-lg px-4 py-5 sm:p-6 hover:shadow-md transition-shadow"
        >
            <h3 class="text-lg leading-6 font-medium text-fg">{entry.title}</h3>
            <p class="mt-1 text-sm text-fg-muted">{entry.summary}</p>
        </a>
    }
}

#[component]
pub fn InfoCard(#[prop(into)] label: String, #[prop(into)] value: String) -> impl IntoView {
    view! {
        <div>
            <dt class="text-sm font-medium text-fg-muted">{label}</dt>
            <dd class="mt-1 text-sm text-fg">{value}</dd>
        </div>
    }
}
