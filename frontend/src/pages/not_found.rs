use crate::{components::empty_state::EmptyState, routes::paths};
use leptos::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface px-4">
            <div class="max-w-md w-full">
                <EmptyState
                    title="Page not found"
                    description="The address you followed does not exist."
                    action_href=paths::HOME
                    action_label="Back to start"
                />
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_not_found_message() {
        let html = render_to_string(|| view! { <NotFoundPage /> });
        assert!(html.contains("Page not found"));
        assert!(html.contains("Back to start"));
    }
}
