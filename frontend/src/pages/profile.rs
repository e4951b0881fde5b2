use crate::{
    components::{cards::InfoCard, empty_state::EmptyState},
    state::session::use_session,
};
use leptos::*;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let (session, _) = use_session();

    move || match session.with(|state| state.current_user().cloned()) {
        Some(user) => view! {
            <div class="bg-surface-elevated shadow rounded-lg px-4 py-5 sm:p-6">
                <h1 class="text-xl font-semibold text-fg mb-4">"My profile"</h1>
                <dl class="grid grid-cols-1 gap-4 sm:grid-cols-3">
                    <InfoCard label="Name" value=user.name.clone() />
                    <InfoCard label="Role" value=user.role.label() />
                    <InfoCard label="User ID" value=user.id.clone() />
                </dl>
                <a href=user.role.home_path() class="mt-6 inline-flex text-sm font-semibold text-action-primary-bg hover:underline">
                    "Back to dashboard"
                </a>
            </div>
        }
        .into_view(),
        None => view! { <EmptyState title="No profile loaded" /> }.into_view(),
    }
}
