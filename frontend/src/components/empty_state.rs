use leptos::*;

#[component]
pub fn EmptyState(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
    #[prop(optional, into)] action_href: Option<String>,
    #[prop(optional, into)] action_label: Option<String>,
) -> impl IntoView {
    let action = action_href.map(|href| {
        let label = action_label.unwrap_or_else(|| "Continue".to_string());
        view! {
            <a href=href class="mt-4 inline-flex text-sm font-semibold text-action-primary-bg hover:underline">
                {label}
            </a>
        }
    });
    view! {
        <div class="text-center py-12 px-4 rounded-lg border-2 border-dashed border-border-strong bg-surface-muted">
            <h3 class="mt-2 text-sm font-semibold text-fg">{title}</h3>
            {description.map(|desc| view! {
                <p class="mt-1 text-sm text-fg-muted">{desc}</p>
            })}
            {action}
        </div>
    }
}
