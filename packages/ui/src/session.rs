//! Session and app context for the UI.
//!
//! [`AppProvider`] puts three things in context for every view below it:
//! the [`RecipesConfig`], a shared [`DummyJsonClient`], and the
//! [`PlatformSession`] store. The logged-in user lives in a
//! `Signal<AuthState>` seeded from storage on mount, so views react to login
//! and logout without re-reading storage.

use api::{AuthFlow, DummyJsonClient};
use dioxus::prelude::*;
use store::{RecipesConfig, SessionRecord, SessionStore};
use tracing::{debug, error};

use crate::icons::FaRightFromBracket;
use crate::Icon;

/// Storage backing the session: `localStorage` on the web, memory elsewhere.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStorage = store::LocalStorage;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformStorage = store::MemoryStorage;

pub type PlatformSession = SessionStore<PlatformStorage>;

fn make_storage() -> PlatformStorage {
    PlatformStorage::default()
}

/// Authentication state for the application.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<SessionRecord>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// The state to switch to when storage now holds `stored`, or `None` if
    /// it already matches. Another tab may have logged in or out.
    pub fn synced_with(&self, stored: Option<SessionRecord>) -> Option<AuthState> {
        (self.user != stored).then_some(AuthState { user: stored })
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

pub fn use_session_store() -> PlatformSession {
    use_context::<PlatformSession>()
}

pub fn use_config() -> RecipesConfig {
    use_context::<RecipesConfig>()
}

pub fn use_client() -> DummyJsonClient {
    use_context::<DummyJsonClient>()
}

/// Provider component for config, HTTP client and session.
/// Wrap the router with this component.
#[component]
pub fn AppProvider(config: RecipesConfig, children: Element) -> Element {
    let config = use_context_provider(|| config);
    use_context_provider(|| DummyJsonClient::new(&config.api));
    let session = use_context_provider(|| {
        SessionStore::with_key(make_storage(), config.session.storage_key.clone())
    });

    let auth_state = use_signal(|| {
        let user = session.load();
        debug!(authenticated = user.is_some(), "Session restored");
        AuthState { user }
    });
    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    on_logout: EventHandler<()>,
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut auth_state = use_auth();
    let flow = AuthFlow::new(use_client(), use_session_store());

    let onclick = move |_| {
        if let Err(e) = flow.logout() {
            error!("Failed to clear session: {}", e.detail());
        }
        auth_state.set(AuthState::default());
        on_logout.call(());
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            Icon { icon: FaRightFromBracket, width: 14, height: 14 }
            span { "{label}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use store::KeyValueStorage;

    use super::*;

    fn record() -> SessionRecord {
        SessionRecord {
            id: 1,
            first_name: "Emily".to_string(),
            last_name: "Johnson".to_string(),
            username: "emilys".to_string(),
            email: "emily.johnson@x.dummyjson.com".to_string(),
        }
    }

    #[test]
    fn test_default_auth_state_is_anonymous() {
        assert!(!AuthState::default().is_authenticated());
        assert!(AuthState { user: Some(record()) }.is_authenticated());
    }

    #[test]
    fn test_platform_session_round_trip() {
        let storage = make_storage();
        let session: PlatformSession = SessionStore::with_key(storage.clone(), "currentUser");

        session.save(&record()).unwrap();
        assert!(storage.get("currentUser").unwrap().is_some());
        assert_eq!(session.load(), Some(record()));

        session.clear().unwrap();
        assert!(session.load().is_none());
    }

    #[test]
    fn test_sync_follows_storage() {
        let signed_in = AuthState { user: Some(record()) };

        assert_eq!(signed_in.synced_with(None), Some(AuthState::default()));
        assert_eq!(signed_in.synced_with(Some(record())), None);
        assert_eq!(AuthState::default().synced_with(None), None);
        assert_eq!(AuthState::default().synced_with(Some(record())), Some(signed_in));
    }

    #[test]
    fn test_logout_elsewhere_is_seen_on_reload() {
        let storage = make_storage();
        let here: PlatformSession = SessionStore::with_key(storage.clone(), "currentUser");
        let other_tab: PlatformSession = SessionStore::with_key(storage, "currentUser");

        here.save(&record()).unwrap();
        let state = AuthState { user: here.load() };
        other_tab.clear().unwrap();

        let next = state.synced_with(here.load()).unwrap();
        assert!(!next.is_authenticated());
    }
}
