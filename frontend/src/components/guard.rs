use crate::{
    api::ApiClient,
    components::{error::SessionErrorPanel, layout::LoadingSpinner},
    routes::paths,
    state::{
        role::RoleSet,
        session::{refresh_session, use_session, Session, SessionError},
    },
    utils::redirect,
};
use leptos::*;

/// Outcome of checking a session against a route's required roles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Wait,
    RedirectToLogin,
    RedirectToUnauthorized,
    ProviderFailed(SessionError),
    Render,
}

/// First match wins: loading, provider failure, signed out, wrong role, allowed.
pub fn evaluate(session: &Session, required: RoleSet) -> GuardDecision {
    if session.is_loading() {
        return GuardDecision::Wait;
    }
    if let Some(err) = session.error() {
        return GuardDecision::ProviderFailed(err.clone());
    }
    if !session.is_authenticated() {
        return GuardDecision::RedirectToLogin;
    }
    if !session.has_any_role(required) {
        return GuardDecision::RedirectToUnauthorized;
    }
    GuardDecision::Render
}

impl GuardDecision {
    /// Where the browser should go, given the location that was requested.
    pub fn redirect_target(&self, requested: &str) -> Option<String> {
        match self {
            GuardDecision::RedirectToLogin => Some(redirect::login_path_with_return(requested)),
            GuardDecision::RedirectToUnauthorized => Some(paths::UNAUTHORIZED.to_string()),
            _ => None,
        }
    }
}

#[component]
pub fn RequireRoles(#[prop(optional)] roles: RoleSet, children: ChildrenFn) -> impl IntoView {
    let (session, set_session) = use_session();
    let decision = create_memo(move |_| session.with(|state| evaluate(state, roles)));

    create_effect(move |_| {
        let decision = decision.get();
        log::debug!("route guard {:?}: {:?}", roles, decision);
        let requested = redirect::current_location().unwrap_or_else(|| paths::HOME.to_string());
        if let Some(target) = decision.redirect_target(&requested) {
            redirect::navigate(&target);
        }
    });

    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let on_retry = Callback::new(move |_: ()| {
        spawn_local(refresh_session(api.clone(), set_session));
    });

    move || match decision.get() {
        GuardDecision::Wait => view! { <LoadingSpinner /> }.into_view(),
        GuardDecision::Render => children().into_view(),
        GuardDecision::ProviderFailed(error) => {
            view! { <SessionErrorPanel error=error on_retry=on_retry /> }.into_view()
        }
        GuardDecision::RedirectToLogin | GuardDecision::RedirectToUnauthorized => ().into_view(),
    }
}

/// Any signed-in user.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    view! { <RequireRoles roles=RoleSet::EMPTY>{children()}</RequireRoles> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{
        role::Role,
        session::{Session, User},
    };

    fn signed_in(role: Role) -> Session {
        Session::Authenticated(User {
            id: format!("u-{}", role),
            name: "Test User".into(),
            role,
        })
    }

    fn all_role_sets() -> Vec<RoleSet> {
        (0u8..32)
            .map(|bits| {
                Role::ALL
                    .into_iter()
                    .enumerate()
                    .filter(|(i, _)| bits & (1 << i) != 0)
                    .map(|(_, role)| role)
                    .collect()
            })
            .collect()
    }

    #[test]
    fn renders_iff_authenticated_and_role_admitted() {
        for roles in all_role_sets() {
            for role in Role::ALL {
                let expected = roles.is_empty() || roles.contains(role);
                let decision = evaluate(&signed_in(role), roles);
                assert_eq!(decision == GuardDecision::Render, expected, "{:?} {:?}", roles, role);
                if !expected {
                    assert_eq!(decision, GuardDecision::RedirectToUnauthorized);
                }
            }
            assert_ne!(evaluate(&Session::Anonymous, roles), GuardDecision::Render);
        }
    }

    #[test]
    fn loading_never_redirects() {
        for roles in all_role_sets() {
            let decision = evaluate(&Session::Loading, roles);
            assert_eq!(decision, GuardDecision::Wait);
            assert_eq!(decision.redirect_target("/admin/fees"), None);
        }
    }

    #[test]
    fn admin_route_rejects_parent() {
        let decision = evaluate(&signed_in(Role::Parent), RoleSet::only(Role::Admin));
        assert_eq!(decision, GuardDecision::RedirectToUnauthorized);
        assert_eq!(
            decision.redirect_target("/admin/fees").as_deref(),
            Some(paths::UNAUTHORIZED)
        );
    }

    #[test]
    fn anonymous_visitor_goes_to_sign_in_with_return_target() {
        let decision = evaluate(&Session::Anonymous, RoleSet::EMPTY);
        assert_eq!(decision, GuardDecision::RedirectToLogin);
        let target = decision.redirect_target("/profile?tab=contact").unwrap();
        assert_eq!(target, "/login?redirect=%2Fprofile%3Ftab%3Dcontact");
        let search = target.split_once('?').map(|(_, q)| q).unwrap();
        assert_eq!(
            redirect::return_target_from_search(search).as_deref(),
            Some("/profile?tab=contact")
        );
    }

    #[test]
    fn teacher_route_renders_for_teacher() {
        assert_eq!(
            evaluate(&signed_in(Role::Teacher), RoleSet::only(Role::Teacher)),
            GuardDecision::Render
        );
    }

    #[test]
    fn provider_failure_is_not_treated_as_signed_out() {
        let failed = Session::Failed(SessionError::Request("timeout".into()));
        let decision = evaluate(&failed, RoleSet::only(Role::Admin));
        assert_eq!(
            decision,
            GuardDecision::ProviderFailed(SessionError::Request("timeout".into()))
        );
        assert_eq!(decision.redirect_target("/admin/dashboard"), None);
    }

    #[test]
    fn render_matches_session_role_check() {
        for roles in all_role_sets() {
            for role in Role::ALL {
                let session = signed_in(role);
                assert_eq!(
                    evaluate(&session, roles) == GuardDecision::Render,
                    session.has_any_role(roles)
                );
            }
        }
    }

    #[test]
    fn evaluation_is_idempotent() {
        let sessions = [
            Session::Loading,
            Session::Anonymous,
            signed_in(Role::NutritionStaff),
            Session::Failed(SessionError::NoProvider),
        ];
        for session in sessions {
            for roles in all_role_sets() {
                assert_eq!(evaluate(&session, roles), evaluate(&session, roles));
            }
        }
    }
}
