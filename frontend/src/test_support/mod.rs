#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::state::{
        role::Role,
        session::{Session, SessionContext, User},
    };
    use leptos::*;

    pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
        let runtime = create_runtime();
        let result = f();
        runtime.dispose();
        result
    }

    pub fn user(role: Role) -> User {
        User {
            id: format!("u-{}", role),
            name: "Abena Osei".into(),
            role,
        }
    }

    pub fn signed_in(role: Role) -> Session {
        Session::Authenticated(user(role))
    }

    pub fn provide_session(session: Session) -> SessionContext {
        let ctx = create_signal(session);
        provide_context::<SessionContext>(ctx);
        ctx
    }
}
