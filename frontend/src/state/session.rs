use crate::{
    api::{ApiClient, ApiError, LoginRequest, UserResponse},
    state::role::{Role, RoleParseError, RoleSet},
};
use leptos::*;
use thiserror::Error;

pub type SessionContext = (ReadSignal<Session>, WriteSignal<Session>);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub role: Role,
}

impl TryFrom<UserResponse> for User {
    type Error = SessionError;

    fn try_from(value: UserResponse) -> Result<Self, Self::Error> {
        let role = value.role.parse::<Role>()?;
        Ok(User {
            id: value.id,
            name: value.name,
            role,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("could not reach the session service: {0}")]
    Request(String),
    #[error(transparent)]
    UnknownRole(#[from] RoleParseError),
    #[error("no session provider is mounted")]
    NoProvider,
}

/// What the client currently knows about the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Session {
    #[default]
    Loading,
    Anonymous,
    Authenticated(User),
    Failed(SessionError),
}

impl Session {
    pub fn is_loading(&self) -> bool {
        matches!(self, Session::Loading)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated(_))
    }

    pub fn current_user(&self) -> Option<&User> {
        match self {
            Session::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.current_user().map(|user| user.role)
    }

    /// True when signed in and `roles` admits the user's role.
    pub fn has_any_role(&self, roles: RoleSet) -> bool {
        self.role().map(|role| roles.admits(role)).unwrap_or(false)
    }

    pub fn error(&self) -> Option<&SessionError> {
        match self {
            Session::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// Maps the `/auth/me` outcome onto a session. A 401 is an ordinary
/// signed-out visitor; anything else that fails is a provider failure.
pub fn resolve_session(result: Result<UserResponse, ApiError>) -> Session {
    match result {
        Ok(user) => match User::try_from(user) {
            Ok(user) => Session::Authenticated(user),
            Err(err) => {
                log::error!("rejecting session: {}", err);
                Session::Failed(err)
            }
        },
        Err(err) if err.is_unauthorized() => Session::Anonymous,
        Err(err) => {
            log::warn!("session lookup failed: {}", err);
            Session::Failed(SessionError::Request(err.error))
        }
    }
}

pub async fn refresh_session(api: ApiClient, set_session: WriteSignal<Session>) {
    set_session.set(Session::Loading);
    let session = resolve_session(api.get_me().await);
    log::debug!("session resolved: {:?}", session);
    set_session.set(session);
}

fn create_session_context() -> SessionContext {
    let (session, set_session) = create_signal(Session::Loading);
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    spawn_local(refresh_session(api, set_session));
    (session, set_session)
}

#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let ctx = create_session_context();
    provide_context::<SessionContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(|| {
        log::error!("use_session called outside of <SessionProvider/>");
        create_signal(Session::Failed(SessionError::NoProvider))
    })
}

pub async fn login_request(
    request: LoginRequest,
    api: &ApiClient,
    set_session: WriteSignal<Session>,
) -> Result<User, ApiError> {
    let response = api.login(request).await?;
    match User::try_from(response.user) {
        Ok(user) => {
            log::info!("signed in as {} ({})", user.id, user.role);
            set_session.set(Session::Authenticated(user.clone()));
            Ok(user)
        }
        Err(err) => {
            set_session.set(Session::Failed(err.clone()));
            Err(ApiError::unknown(err.to_string()))
        }
    }
}

pub async fn logout(api: &ApiClient, set_session: WriteSignal<Session>) -> Result<(), ApiError> {
    let result = api.logout().await;
    if let Err(err) = &result {
        log::warn!("logout request failed, clearing session anyway: {}", err);
    }
    set_session.set(Session::Anonymous);
    result
}

pub fn use_login_action() -> Action<LoginRequest, Result<User, ApiError>> {
    let (_session, set_session) = use_session();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);

    create_action(move |request: &LoginRequest| {
        let payload = request.clone();
        let api = api.clone();
        async move { login_request(payload, &api, set_session).await }
    })
}

pub fn use_logout_action() -> Action<(), Result<(), ApiError>> {
    let (_session, set_session) = use_session();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);

    create_action(move |_: &()| {
        let api = api.clone();
        async move { logout(&api, set_session).await }
    })
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn login_and_logout_update_session() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/auth/login");
                then.status(200).json_body(json!({
                    "user": { "id": "u1", "name": "Kofi Boateng", "role": "admin" },
                    "access_token": "token"
                }));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/auth/logout");
                then.status(200).json_body(json!({}));
            })
            .await;

        let runtime = create_runtime();
        let (session, set_session) = create_signal(Session::Anonymous);
        let api = ApiClient::new_with_base_url(server.url("/api"));

        let user = login_request(
            LoginRequest {
                email: "kofi@kidslink.test".into(),
                password: "secret".into(),
            },
            &api,
            set_session,
        )
        .await
        .unwrap();
        assert_eq!(user.role, Role::Admin);
        assert!(session.get_untracked().is_authenticated());

        logout(&api, set_session).await.unwrap();
        assert_eq!(session.get_untracked(), Session::Anonymous);
        runtime.dispose();
    }

    #[tokio::test]
    async fn login_with_unknown_role_fails_session() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/auth/login");
                then.status(200).json_body(json!({
                    "user": { "id": "u9", "name": "Visitor", "role": "visitor" }
                }));
            })
            .await;

        let runtime = create_runtime();
        let (session, set_session) = create_signal(Session::Anonymous);
        let api = ApiClient::new_with_base_url(server.url("/api"));

        let err = login_request(
            LoginRequest {
                email: "visitor@kidslink.test".into(),
                password: "secret".into(),
            },
            &api,
            set_session,
        )
        .await
        .unwrap_err();
        assert!(err.error.contains("visitor"));
        assert!(matches!(
            session.get_untracked(),
            Session::Failed(SessionError::UnknownRole(_))
        ));
        runtime.dispose();
    }

    #[tokio::test]
    async fn logout_clears_session_even_when_request_fails() {
        let runtime = create_runtime();
        let (session, set_session) = create_signal(Session::Anonymous);
        set_session.set(Session::Authenticated(User {
            id: "u1".into(),
            name: "Kofi".into(),
            role: Role::Parent,
        }));
        let api = ApiClient::new_with_base_url("http://127.0.0.1:9/api");

        assert!(logout(&api, set_session).await.is_err());
        assert_eq!(session.get_untracked(), Session::Anonymous);
        runtime.dispose();
    }

    #[tokio::test]
    async fn refresh_session_resolves_from_me_endpoint() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/auth/me");
                then.status(200).json_body(json!({
                    "id": "u2",
                    "name": "Efua Owusu",
                    "role": "nutrition_staff"
                }));
            })
            .await;

        let runtime = create_runtime();
        let (session, set_session) = create_signal(Session::Anonymous);
        refresh_session(ApiClient::new_with_base_url(server.url("/api")), set_session).await;
        assert_eq!(session.get_untracked().role(), Some(Role::NutritionStaff));
        runtime.dispose();
    }
}
