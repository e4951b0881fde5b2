use crate::{pages::dashboard::utils::greeting_for_hour, state::role::Role, utils::time};
use leptos::*;

#[component]
pub fn GreetingBanner(
    #[prop(into)] name: MaybeSignal<String>,
    role: Role,
    /// Fixed hour of day; the local clock is read when absent.
    #[prop(optional)]
    hour: Option<u32>,
) -> impl IntoView {
    let greeting = greeting_for_hour(hour.unwrap_or_else(time::current_local_hour));
    let headline = move || {
        let name = name.get();
        if name.is_empty() {
            format!("{greeting}!")
        } else {
            format!("{greeting}, {name}!")
        }
    };

    view! {
        <div class="bg-gradient-to-br from-action-primary-bg to-action-primary-bg-hover text-text-inverse shadow-lg rounded-lg px-6 py-5">
            <h1 class="text-2xl font-bold">{headline}</h1>
            <p class="mt-1 text-sm opacity-90">{format!("{} dashboard", role.label())}</p>
        </div>
    }
}
