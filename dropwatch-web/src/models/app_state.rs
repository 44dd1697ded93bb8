use shared::models::{Role, UserRecord};
use shared::{Session, SessionStore, ThemeStore};
use yewdux::Store;

use crate::storage::BrowserStorage;

/// Global client state: the authenticated session and the theme flag.
///
/// Both halves rehydrate from `localStorage` when the store is first
/// touched, which happens synchronously inside the first render, so the
/// route gate never sees a pre-restore session.
#[derive(Debug, Clone, PartialEq, Store)]
pub struct AppState {
    /// Who is logged in, if anyone.
    pub session: SessionStore<BrowserStorage>,
    /// Dark or light mode.
    pub theme: ThemeStore<BrowserStorage>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::rehydrate()
    }
}

impl AppState {
    /// Restore both stores from browser storage.
    pub fn rehydrate() -> Self {
        Self {
            session: SessionStore::rehydrate(BrowserStorage),
            theme: ThemeStore::rehydrate(BrowserStorage),
        }
    }

    /// Current session, for route decisions.
    pub fn session(&self) -> Session {
        self.session.snapshot()
    }

    /// Start a session for `user` acting as `role`.
    pub fn login(&mut self, user: UserRecord, role: Role) {
        tracing::info!(role = %role, "session started");
        self.session.login(user, role);
    }

    /// End the current session.
    pub fn logout(&mut self) {
        tracing::info!("session ended");
        self.session.logout();
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use shared::KeyValueStorage;
    use shared::models::UserId;
    use shared::session::SESSION_STORAGE_KEY;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn login_survives_rehydration() {
        let mut state = AppState::rehydrate();
        state.login(
            UserRecord::new(UserId::Number(7), "Ada", "ada@example.com", Role::User),
            Role::User,
        );

        let restored = AppState::rehydrate();
        assert!(restored.session.is_user());
        assert_eq!(restored.session(), state.session());

        state.logout();
        assert!(!AppState::rehydrate().session.is_authenticated());
        BrowserStorage.remove(SESSION_STORAGE_KEY).unwrap();
    }
}
