//! Academy authentication context.

use dioxus::prelude::*;

use api::{AcademyRole, AcademyUser, ApiConfig, HttpClient};
use store::{AcademySnapshot, AcademyStore, StoreError};

use crate::platform::{platform_storage, PlatformStorage};

/// Concrete store type behind the provider.
pub type AcademyAuth = AcademyStore<HttpClient, PlatformStorage>;

/// Handle exposed through context: the store plus a signal mirroring its
/// snapshot so components re-render on change.
#[derive(Clone)]
pub struct AcademyAuthContext {
    store: AcademyAuth,
    snapshot: Signal<AcademySnapshot>,
}

impl AcademyAuthContext {
    /// Current session snapshot. Reading it subscribes the component.
    pub fn snapshot(&self) -> AcademySnapshot {
        self.snapshot.cloned()
    }

    pub fn is_authenticated(&self) -> bool {
        self.snapshot.read().user.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.store.is_admin()
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<AcademyUser, StoreError> {
        self.store.login(email, password).await
    }

    pub async fn signup(
        &self,
        name: &str,
        email: &str,
        password: &str,
        role: AcademyRole,
    ) -> Result<AcademyUser, StoreError> {
        self.store.signup(name, email, password, role).await
    }

    pub fn logout(&self) {
        self.store.logout();
    }
}

/// Get the academy auth context provided by [`AcademyAuthProvider`].
pub fn use_academy_auth() -> AcademyAuthContext {
    use_context::<AcademyAuthContext>()
}

/// Provider component that owns the academy session store.
/// Wrap the academy area with this to enable authentication state.
#[component]
pub fn AcademyAuthProvider(children: Element) -> Element {
    let store = use_hook(|| {
        AcademyStore::new(HttpClient::new(ApiConfig::from_env()), platform_storage())
    });
    let snapshot = use_signal(|| store.snapshot());

    // Mirror store changes into the signal, then hydrate once from durable
    // storage (no network involved).
    use_hook(|| {
        let observed = store.clone();
        let mut snapshot = snapshot;
        store.subscribe(move || snapshot.set(observed.snapshot()));
        store.hydrate();
    });

    use_context_provider(|| AcademyAuthContext {
        store: store.clone(),
        snapshot,
    });

    rsx! {
        {children}
    }
}
