use crate::{
    routes::{paths, RouteEntry, RouteTable},
    state::session::{use_logout_action, use_session},
    utils::redirect,
};
use leptos::*;

const NAV_LINK_CLASS: &str =
    "text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover";

#[component]
pub fn Header() -> impl IntoView {
    let (session, _set_session) = use_session();
    let (menu_open, set_menu_open) = create_signal(false);
    let table = store_value(RouteTable::app());
    let nav_entries = move || -> Vec<&'static RouteEntry> {
        session.with(|state| {
            state
                .role()
                .map(|role| table.with_value(|t| t.navigation_for(role)))
                .unwrap_or_default()
        })
    };
    let user_label = move || {
        session.with(|state| {
            state
                .current_user()
                .map(|user| format!("{} ({})", user.name, user.role.label()))
                .unwrap_or_default()
        })
    };

    let logout_action = use_logout_action();
    let logout_pending = logout_action.pending();
    create_effect(move |_| {
        if logout_action.value().get().is_some() {
            redirect::navigate(&redirect::signed_out_login_path());
        }
    });
    let on_logout = move |_| {
        if logout_pending.get_untracked() {
            return;
        }
        set_menu_open.set(false);
        logout_action.dispatch(());
    };
    let toggle_menu = move |_| set_menu_open.update(|open| *open = !*open);

    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <a href=paths::HOME class="text-xl font-semibold text-fg">"KidsLink"</a>
                    <div class="flex items-center gap-2">
                        <nav class="hidden lg:flex space-x-2">
                            {move || {
                                nav_entries()
                                    .into_iter()
                                    .map(|entry| view! { <a href=entry.path class=NAV_LINK_CLASS>{entry.title}</a> })
                                    .collect_view()
                            }}
                        </nav>
                        <span class="hidden lg:inline text-sm text-fg-muted">{user_label}</span>
                        <button
                            on:click=on_logout
                            class=format!("{} disabled:opacity-50", NAV_LINK_CLASS)
                            disabled=move || logout_pending.get()
                        >
                            "Sign out"
                        </button>
                        <button
                            type="button"
                            class="lg:hidden inline-flex items-center justify-center p-2 rounded-md text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                            on:click=toggle_menu
                            aria-expanded=move || menu_open.get().to_string()
                            aria-controls="mobile-nav"
                        >
                            <span class="sr-only">
                                {move || if menu_open.get() { "Close menu" } else { "Open menu" }}
                            </span>
                            "☰"
                        </button>
                    </div>
                </div>
                <Show when=move || menu_open.get()>
                    <nav id="mobile-nav" class="lg:hidden border-t border-border px-4 py-3 space-y-2">
                        {move || {
                            nav_entries()
                                .into_iter()
                                .map(|entry| view! {
                                    <a
                                        href=entry.path
                                        class=format!("block {}", NAV_LINK_CLASS)
                                        on:click=move |_| set_menu_open.set(false)
                                    >
                                        {entry.title}
                                    </a>
                                })
                                .collect_view()
                        }}
                    </nav>
                </Show>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Header/>
            <main class="max-w-7xl mx-auto py-6 sm:px-6 lg:px-8">
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8" role="status" aria-label="Loading">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4">
            <div class="flex">
                <div class="flex-shrink-0">
                    <i class="fas fa-exclamation-circle"></i>
                </div>
                <div class="ml-3">
                    <p class="text-sm">{message}</p>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn SuccessMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded mb-4">
            <div class="flex">
                <div class="flex-shrink-0">
                    <i class="fas fa-check-circle"></i>
                </div>
                <div class="ml-3">
                    <p class="text-sm">{message}</p>
                </div>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::{role::Role, session::Session};
    use crate::test_support::helpers::{provide_session, signed_in};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn header_lists_links_for_role() {
        let html = render_to_string(move || {
            provide_session(signed_in(Role::NutritionStaff));
            view! { <Header /> }
        });
        assert!(html.contains("/nutrition/menus"));
        assert!(html.contains("/nutrition/allergies"));
        assert!(html.contains("/profile"));
        assert!(!html.contains("/admin/fees"));
        assert!(html.contains("Nutrition staff"));
    }

    #[test]
    fn header_has_no_links_when_signed_out() {
        let html = render_to_string(move || {
            provide_session(Session::Anonymous);
            view! { <Header /> }
        });
        assert!(!html.contains("/profile"));
        assert!(html.contains("Sign out"));
    }

    #[test]
    fn layout_renders_children() {
        let html = render_to_string(move || {
            provide_session(signed_in(Role::Admin));
            view! { <Layout><div>"child"</div></Layout> }
        });
        assert!(html.contains("child"));
        assert!(html.contains("/admin/complaints"));
    }

    #[test]
    fn renders_feedback_components() {
        let html = render_to_string(move || {
            view! {
                <div>
                    <LoadingSpinner />
                    <ErrorMessage message="error" />
                    <SuccessMessage message="ok" />
                </div>
            }
        });
        assert!(html.contains("animate-spin"));
        assert!(html.contains("error"));
        assert!(html.contains("text-status-success-text"));
        assert!(html.contains("ok"));
    }
}
