use contracts::system::auth::UserIdentity;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub access_token: Option<String>,
    pub identity: Option<UserIdentity>,
}

/// Session context provider component.
#[component]
pub fn SessionProvider(children: ChildrenFn) -> impl IntoView {
    let (session, set_session) = signal(SessionState::default());

    // Try to restore the session from the persisted token on mount.
    Effect::new(move |_| {
        spawn_local(async move {
            if let Some(access_token) = storage::get_access_token() {
                match api::get_current_user(&access_token).await {
                    Ok(identity) => {
                        set_session.set(SessionState {
                            access_token: Some(access_token),
                            identity: Some(identity),
                        });
                    }
                    Err(_) => {
                        // Token invalid or expired; back to the login page.
                        storage::clear_access_token();
                    }
                }
            }
        });
    });

    provide_context(session);
    provide_context(set_session);

    children()
}

/// Hook to access session state.
pub fn use_session() -> (ReadSignal<SessionState>, WriteSignal<SessionState>) {
    let session = use_context::<ReadSignal<SessionState>>()
        .expect("SessionProvider not found in component tree");
    let set_session = use_context::<WriteSignal<SessionState>>()
        .expect("SessionProvider not found in component tree");

    (session, set_session)
}

/// Perform login and persist the token.
pub async fn do_login(
    set_session: WriteSignal<SessionState>,
    email: String,
    password: String,
) -> Result<(), String> {
    let response = api::login(email, password).await?;

    storage::save_access_token(&response.access_token);
    set_session.set(SessionState {
        access_token: Some(response.access_token),
        identity: Some(response.user),
    });

    Ok(())
}

/// Clear the persisted token and session state.
pub fn do_logout(set_session: WriteSignal<SessionState>) {
    storage::clear_access_token();
    set_session.set(SessionState::default());
}
