use crate::{components::common::ButtonVariant, routes::paths};
use leptos::*;

#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface px-4">
            <div class="max-w-md w-full bg-surface-elevated shadow rounded-lg p-8 text-center space-y-4">
                <h1 class="text-2xl font-bold text-fg">"Access denied"</h1>
                <p class="text-sm text-fg-muted">
                    "Your account does not have permission to open this page. Contact the school administrator if you think this is a mistake."
                </p>
                <a
                    href=paths::HOME
                    class=format!("inline-flex px-4 py-2 rounded-md {}", ButtonVariant::Primary.classes())
                >
                    "Go to my dashboard"
                </a>
            </div>
        </div>
    }
}
