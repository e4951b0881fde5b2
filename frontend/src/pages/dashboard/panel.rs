use crate::{
    pages::dashboard::{
        components::{GreetingBanner, ShortcutGrid},
        utils::shortcuts_for,
    },
    routes::RouteTable,
    state::{role::Role, session::use_session},
};
use leptos::*;

#[component]
pub fn DashboardPage(role: Role) -> impl IntoView {
    let (session, _) = use_session();
    let name = Signal::derive(move || {
        session.with(|state| {
            state
                .current_user()
                .map(|user| user.name.clone())
                .unwrap_or_default()
        })
    });
    let shortcuts = shortcuts_for(&RouteTable::app(), role);

    view! {
        <div class="space-y-6 px-4 sm:px-0">
            <GreetingBanner name=name role=role />
            <ShortcutGrid entries=shortcuts />
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{helpers::signed_in, ssr::render_with_session};

    #[test]
    fn parent_dashboard_links_parent_sections() {
        let html = render_with_session(signed_in(Role::Parent), move || {
            view! { <DashboardPage role=Role::Parent /> }
        });
        assert!(html.contains("Abena Osei"));
        assert!(html.contains("/parent/children"));
        assert!(html.contains("/parent/fees"));
        assert!(!html.contains("/admin/"));
        assert!(!html.contains("href=\"/parent/dashboard\""));
    }

    #[test]
    fn health_dashboard_includes_shared_allergy_page() {
        let html = render_with_session(signed_in(Role::HealthCareStaff), move || {
            view! { <DashboardPage role=Role::HealthCareStaff /> }
        });
        assert!(html.contains("/health/incidents"));
        assert!(html.contains("/nutrition/allergies"));
        assert!(!html.contains("/nutrition/menus"));
    }
}
