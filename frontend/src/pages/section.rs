use crate::{
    components::{cards::InfoCard, empty_state::EmptyState},
    routes::{paths, RouteEntry},
    state::session::use_session,
};
use leptos::*;

/// Turns `child_id` into "Child ID".
pub fn param_label(name: &str) -> String {
    name.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| match word {
            "id" => "ID".to_string(),
            _ => {
                let mut chars = word.chars();
                chars
                    .next()
                    .map(|first| first.to_uppercase().chain(chars).collect())
                    .unwrap_or_default()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[component]
pub fn SectionPage(
    entry: &'static RouteEntry,
    #[prop(optional)] params: Vec<(&'static str, String)>,
) -> impl IntoView {
    let (session, _) = use_session();
    let back_href = move || {
        session.with(|state| {
            state
                .role()
                .map(|role| role.home_path())
                .unwrap_or(paths::HOME)
        })
    };
    let details = (!params.is_empty()).then(|| {
        view! {
            <dl class="grid grid-cols-1 gap-4 sm:grid-cols-3">
                {params
                    .into_iter()
                    .map(|(name, value)| view! { <InfoCard label=param_label(name) value=value /> })
                    .collect_view()}
            </dl>
        }
    });

    view! {
        <div class="space-y-6 px-4 sm:px-0">
            <div>
                <h1 class="text-2xl font-bold text-fg">{entry.title}</h1>
                <p class="mt-1 text-sm text-fg-muted">{entry.summary}</p>
            </div>
            {details}
            <EmptyState
                title="No records to show yet"
                description="Entries will appear here once they are added."
            />
            <a href=back_href class="inline-flex text-sm font-semibold text-action-primary-bg hover:underline">
                "Back to dashboard"
            </a>
        </div>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::routes::RouteTable;
    use crate::state::role::Role;
    use crate::test_support::{helpers::signed_in, ssr::render_with_session};

    #[test]
    fn renders_entry_and_params() {
        let matched = RouteTable::app().resolve("/health/records/c-17").unwrap();
        let title = matched.entry.title;
        let html = render_with_session(signed_in(Role::HealthCareStaff), move || {
            view! { <SectionPage entry=matched.entry params=matched.params /> }
        });
        assert!(html.contains(title));
        assert!(html.contains("Child ID"));
        assert!(html.contains("c-17"));
        assert!(html.contains("No records to show yet"));
        assert!(html.contains("/health/dashboard"));
    }

    #[test]
    fn renders_without_params() {
        let entry = RouteTable::app().resolve("/admin/fees").unwrap().entry;
        let html = render_with_session(signed_in(Role::Admin), move || {
            view! { <SectionPage entry=entry /> }
        });
        assert!(html.contains(entry.title));
        assert!(!html.contains("<dl"));
    }
}
