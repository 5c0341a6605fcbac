//! Session state: held in a Leptos context, restored from localStorage on
//! mount, written at login, cleared at logout. Components read permissions
//! through this context rather than any ambient global.

use contracts::system::auth::{Permission, UserInfo};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user: Option<UserInfo>,
    pub role: String,
    pub permissions: Vec<Permission>,
}

#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::default());

    // Restore the session from localStorage on mount; the token is
    // validated against the API before the session is trusted.
    Effect::new(move |_| {
        let Some(access_token) = storage::get_access_token() else {
            return;
        };
        let Some(session) = storage::get_session() else {
            storage::clear();
            return;
        };
        spawn_local(async move {
            match api::get_current_user(&access_token).await {
                Ok(user) => {
                    let _ = set_auth_state.try_set(AuthState {
                        access_token: Some(access_token),
                        user: Some(user),
                        role: session.role,
                        permissions: storage::load_permissions(),
                    });
                }
                Err(_) => {
                    // Token expired or revoked; force a fresh login.
                    storage::clear();
                }
            }
        });
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

pub fn do_logout() {
    if let Some(token) = storage::get_access_token() {
        spawn_local(async move {
            let _ = api::logout(&token).await;
        });
    }

    storage::clear();

    let (_, set_auth_state) = use_auth();
    set_auth_state.set(AuthState::default());
}
