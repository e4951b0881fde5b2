use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::{
    api::ApiClient,
    components::{
        guard::{RequireAuth, RequireRoles},
        layout::Layout,
    },
    pages::{
        DashboardPage, HomePage, LoginPage, NotFoundPage, ProfilePage, SectionPage,
        UnauthorizedPage,
    },
    routes::{Access, Page, RouteMatch, RouteTable},
    state::session::SessionProvider,
};

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_context(ApiClient::new());
    view! {
        <Title formatter=|text| format!("{text} | KidsLink") />
        <SessionProvider>
            <Router>
                <Routes>
                    <Route path="/*any" view=RoutedPage />
                </Routes>
            </Router>
        </SessionProvider>
    }
}

/// Every path goes through the route table so access rules live in one place.
#[component]
fn RoutedPage() -> impl IntoView {
    let location = use_location();
    let table = store_value(RouteTable::app());

    move || {
        let path = location.pathname.get();
        match table.with_value(|table| table.resolve(&path)) {
            Some(matched) => render_route(matched),
            None => {
                log::debug!("no route for {}", path);
                view! {
                    <Title text="Page not found" />
                    <NotFoundPage />
                }
                .into_view()
            }
        }
    }
}

/// Wraps protected entries in the guard and the signed-in layout.
pub fn render_route(matched: RouteMatch) -> View {
    let title = matched.entry.title;
    let access = matched.entry.access;
    let matched = store_value(matched);
    let page = match access {
        Access::Public => matched.with_value(page_view),
        Access::Protected(roles) if roles.is_empty() => view! {
            <RequireAuth>
                <Layout>{matched.with_value(page_view)}</Layout>
            </RequireAuth>
        }
        .into_view(),
        Access::Protected(roles) => view! {
            <RequireRoles roles=roles>
                <Layout>{matched.with_value(page_view)}</Layout>
            </RequireRoles>
        }
        .into_view(),
    };
    view! {
        <Title text=title />
        {page}
    }
    .into_view()
}

fn page_view(matched: &RouteMatch) -> View {
    match matched.entry.page {
        Page::Home => view! { <HomePage /> }.into_view(),
        Page::Login => view! { <LoginPage /> }.into_view(),
        Page::Unauthorized => view! { <UnauthorizedPage /> }.into_view(),
        Page::Profile => view! { <ProfilePage /> }.into_view(),
        Page::Dashboard(role) => view! { <DashboardPage role=role /> }.into_view(),
        Page::Section => {
            view! { <SectionPage entry=matched.entry params=matched.params.clone() /> }.into_view()
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::routes::{paths, Access, Page, RouteTable};
    use crate::state::role::Role;

    #[test]
    fn every_page_kind_is_reachable() {
        let table = RouteTable::app();
        let pages: Vec<Page> = table.entries().map(|entry| entry.page).collect();
        for page in [Page::Home, Page::Login, Page::Unauthorized, Page::Profile, Page::Section] {
            assert!(pages.contains(&page), "{:?} has no route", page);
        }
        for role in Role::ALL {
            assert!(pages.contains(&Page::Dashboard(role)));
        }
    }

    #[test]
    fn only_entry_pages_are_public() {
        let table = RouteTable::app();
        let public: Vec<&str> = table
            .entries()
            .filter(|entry| entry.access == Access::Public)
            .map(|entry| entry.path)
            .collect();
        assert_eq!(public, vec![paths::HOME, paths::LOGIN, paths::UNAUTHORIZED]);
    }
}
