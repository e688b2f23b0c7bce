use dioxus::prelude::*;

use crate::supabase::{AuthUser, Client, Config, Session};

/// The identity context shared by every protected screen.
///
/// Initialized once at app start and torn down on sign-out. While `loading`
/// is set the gate renders a skeleton and no screen issues data requests.
#[derive(Clone, Default, PartialEq)]
pub struct SessionState {
    pub user: Option<AuthUser>,
    pub access_token: Option<String>,
    pub loading: bool,
}

impl SessionState {
    /// The state the app boots with, before the session has resolved.
    pub fn start() -> Self {
        Self {
            user: None,
            access_token: None,
            loading: true,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Resolves the initial lookup or a fresh sign-in/sign-up result.
    pub fn resolve(&mut self, session: Option<Session>) {
        match session {
            Some(session) => {
                self.user = Some(session.user);
                self.access_token = Some(session.access_token);
            }
            None => {
                self.user = None;
                self.access_token = None;
            }
        }
        self.loading = false;
    }

    /// Tears the session down after sign-out.
    pub fn clear(&mut self) {
        self.user = None;
        self.access_token = None;
        self.loading = false;
    }
}

pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Backend client bound to the current session's access token.
pub fn supabase_client(state: &SessionState) -> Client {
    Client::new(Config::from_build_env()).with_access_token(state.access_token.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::supabase::auth::UserMetadata;

    fn session() -> Session {
        Session {
            access_token: "token-1".into(),
            user: AuthUser {
                id: "u1".into(),
                email: Some("vet@clinica.mx".into()),
                user_metadata: UserMetadata::default(),
            },
        }
    }

    /// Tests the lifecycle: boot, resolve, sign-out teardown.
    ///
    /// Expected: loading only before the first resolution; clear drops the
    /// identity and token together.
    #[test]
    fn resolves_and_clears() {
        let mut state = SessionState::start();
        assert!(state.loading);
        assert!(!state.is_authenticated());

        state.resolve(Some(session()));
        assert!(!state.loading);
        assert!(state.is_authenticated());
        assert_eq!(state.access_token.as_deref(), Some("token-1"));

        state.clear();
        assert!(!state.is_authenticated());
        assert_eq!(state.access_token, None);
    }

    /// Tests resolving with no session.
    ///
    /// Expected: not loading, not authenticated.
    #[test]
    fn resolves_unauthenticated() {
        let mut state = SessionState::start();
        state.resolve(None);
        assert!(!state.loading);
        assert!(!state.is_authenticated());
    }
}
