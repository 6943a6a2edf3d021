//! Academy session store.
//!
//! Single source of truth for "who is logged in" in the academy area,
//! durable across restarts via [`SessionStorage`]. Hydration runs no
//! network calls: the persisted token and user snapshot are trusted until a
//! later request proves them stale.

use api::{AcademyApi, AcademyRole, AcademyUser};

use crate::error::StoreError;
use crate::reactive::Reactive;
use crate::storage::{keys, SessionStorage};

/// Observable academy session state.
#[derive(Clone, Debug, PartialEq)]
pub struct AcademySnapshot {
    pub user: Option<AcademyUser>,
    pub token: Option<String>,
    /// True only until the first [`AcademyStore::hydrate`] completes.
    pub loading: bool,
}

impl Default for AcademySnapshot {
    fn default() -> Self {
        Self {
            user: None,
            token: None,
            loading: true,
        }
    }
}

/// Academy session store with injected API client and storage backend.
///
/// Clones share the same state, so one instance can be handed to several
/// consumers.
#[derive(Clone)]
pub struct AcademyStore<A, S> {
    api: A,
    storage: S,
    state: Reactive<AcademySnapshot>,
}

impl<A, S> AcademyStore<A, S>
where
    A: AcademyApi,
    S: SessionStorage,
{
    pub fn new(api: A, storage: S) -> Self {
        Self {
            api,
            storage,
            state: Reactive::new(AcademySnapshot::default()),
        }
    }

    /// Current session snapshot.
    pub fn snapshot(&self) -> AcademySnapshot {
        self.state.get()
    }

    /// Register a callback invoked after every state change.
    pub fn subscribe(&self, listener: impl FnMut() + 'static) {
        self.state.subscribe(listener);
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.get().user.is_some()
    }

    /// Whether the signed-in user is an academy admin.
    pub fn is_admin(&self) -> bool {
        matches!(self.state.get().user, Some(user) if user.role == AcademyRole::Admin)
    }

    /// Rebuild session state from durable storage.
    ///
    /// Reads the current-scheme keys first, then falls back to the legacy
    /// `token`/`user` pair, rewriting it under the current scheme and
    /// deleting the old keys. An unparseable stored user purges every key
    /// and starts the session unauthenticated. Safe to call more than once.
    pub fn hydrate(&self) {
        match self.read_persisted() {
            Some((token, user)) => {
                tracing::debug!(user = %user.email, "academy session restored");
                self.state.set(AcademySnapshot {
                    user: Some(user),
                    token: Some(token),
                    loading: false,
                });
            }
            None => {
                self.state.set(AcademySnapshot {
                    user: None,
                    token: None,
                    loading: false,
                });
            }
        }
    }

    fn read_persisted(&self) -> Option<(String, AcademyUser)> {
        if let Some(raw) = self.storage.get(keys::ACADEMY_USER) {
            let user = match serde_json::from_str::<AcademyUser>(&raw) {
                Ok(user) => user,
                Err(err) => {
                    tracing::warn!(%err, "stored academy user is unreadable, purging session keys");
                    self.purge_keys();
                    return None;
                }
            };
            let token = self.storage.get(keys::ACADEMY_TOKEN)?;
            return Some((token, user));
        }

        // One-time migration from the legacy key names.
        if let Some(raw) = self.storage.get(keys::LEGACY_USER) {
            let user = match serde_json::from_str::<AcademyUser>(&raw) {
                Ok(user) => user,
                Err(err) => {
                    tracing::warn!(%err, "legacy academy user is unreadable, purging session keys");
                    self.purge_keys();
                    return None;
                }
            };
            let token = self.storage.get(keys::LEGACY_TOKEN)?;
            tracing::debug!("migrating legacy academy session keys");
            self.storage.set(keys::ACADEMY_TOKEN, &token);
            self.storage.set(keys::ACADEMY_USER, &raw);
            self.storage.remove(keys::LEGACY_TOKEN);
            self.storage.remove(keys::LEGACY_USER);
            return Some((token, user));
        }

        None
    }

    fn purge_keys(&self) {
        self.storage.remove(keys::ACADEMY_TOKEN);
        self.storage.remove(keys::ACADEMY_USER);
        self.storage.remove(keys::LEGACY_TOKEN);
        self.storage.remove(keys::LEGACY_USER);
    }

    /// Sign in against the remote auth endpoint.
    ///
    /// On success the token and user snapshot are persisted and the
    /// in-memory state updated; on any failure nothing changes.
    pub async fn login(&self, email: &str, password: &str) -> Result<AcademyUser, StoreError> {
        let auth = self.api.login(email, password).await?;
        self.store_session(&auth.token, &auth.user);
        Ok(auth.user)
    }

    /// Create an account server-side, then sign in as it. Same contract as
    /// [`login`](Self::login).
    pub async fn signup(
        &self,
        name: &str,
        email: &str,
        password: &str,
        role: AcademyRole,
    ) -> Result<AcademyUser, StoreError> {
        let auth = self.api.signup(name, email, password, role).await?;
        self.store_session(&auth.token, &auth.user);
        Ok(auth.user)
    }

    fn store_session(&self, token: &str, user: &AcademyUser) {
        self.storage.set(keys::ACADEMY_TOKEN, token);
        if let Ok(raw) = serde_json::to_string(user) {
            self.storage.set(keys::ACADEMY_USER, &raw);
        }
        self.state.update(|state| {
            state.user = Some(user.clone());
            state.token = Some(token.to_string());
            state.loading = false;
        });
    }

    /// Drop the session locally. Academy tokens are stateless bearer
    /// tokens, so there is no server round trip and this cannot fail.
    pub fn logout(&self) {
        self.purge_keys();
        self.state.update(|state| {
            state.user = None;
            state.token = None;
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStorage;
    use api::{AcademyAuth, ApiError};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct MockAcademyApi {
        auth: Option<AcademyAuth>,
        calls: Arc<Mutex<Vec<String>>>,
    }

    impl MockAcademyApi {
        fn accepting(user: AcademyUser) -> Self {
            Self {
                auth: Some(AcademyAuth {
                    token: "tok-1".into(),
                    user,
                }),
                calls: Arc::default(),
            }
        }

        fn rejecting() -> Self {
            Self::default()
        }
    }

    impl AcademyApi for MockAcademyApi {
        async fn login(&self, email: &str, _password: &str) -> Result<AcademyAuth, ApiError> {
            self.calls.lock().unwrap().push(format!("login {email}"));
            self.auth.clone().ok_or(ApiError::Rejected {
                status: 401,
                message: "Invalid email or password".into(),
            })
        }

        async fn signup(
            &self,
            _name: &str,
            email: &str,
            _password: &str,
            _role: AcademyRole,
        ) -> Result<AcademyAuth, ApiError> {
            self.calls.lock().unwrap().push(format!("signup {email}"));
            self.auth.clone().ok_or(ApiError::Rejected {
                status: 409,
                message: "An account with this email already exists".into(),
            })
        }
    }

    fn sample_user(role: AcademyRole) -> AcademyUser {
        AcademyUser {
            id: "u1".into(),
            name: "Ada".into(),
            email: "a@b.com".into(),
            role,
        }
    }

    fn user_json(role: AcademyRole) -> String {
        serde_json::to_string(&sample_user(role)).unwrap()
    }

    #[test]
    fn test_hydrate_restores_persisted_session() {
        let storage = MemoryStorage::new();
        storage.set(keys::ACADEMY_TOKEN, "tok-1");
        storage.set(keys::ACADEMY_USER, &user_json(AcademyRole::Student));

        let store = AcademyStore::new(MockAcademyApi::rejecting(), storage);
        assert!(store.snapshot().loading);

        store.hydrate();
        let snapshot = store.snapshot();
        assert!(!snapshot.loading);
        assert_eq!(snapshot.token.as_deref(), Some("tok-1"));
        assert_eq!(snapshot.user, Some(sample_user(AcademyRole::Student)));
    }

    #[test]
    fn test_hydrate_is_idempotent() {
        let storage = MemoryStorage::new();
        storage.set(keys::ACADEMY_TOKEN, "tok-1");
        storage.set(keys::ACADEMY_USER, &user_json(AcademyRole::Student));

        let store = AcademyStore::new(MockAcademyApi::rejecting(), storage);
        store.hydrate();
        let first = store.snapshot();
        store.hydrate();
        assert_eq!(store.snapshot(), first);
    }

    #[test]
    fn test_hydrate_migrates_legacy_keys() {
        let storage = MemoryStorage::new();
        storage.set(keys::LEGACY_TOKEN, "tok-old");
        storage.set(keys::LEGACY_USER, &user_json(AcademyRole::Instructor));

        let store = AcademyStore::new(MockAcademyApi::rejecting(), storage.clone());
        store.hydrate();

        // Session restored from the legacy pair...
        let snapshot = store.snapshot();
        assert_eq!(snapshot.token.as_deref(), Some("tok-old"));
        assert!(snapshot.user.is_some());

        // ...and rewritten under the current scheme.
        assert_eq!(storage.get(keys::ACADEMY_TOKEN).as_deref(), Some("tok-old"));
        assert_eq!(
            storage.get(keys::ACADEMY_USER),
            Some(user_json(AcademyRole::Instructor))
        );
        assert_eq!(storage.get(keys::LEGACY_TOKEN), None);
        assert_eq!(storage.get(keys::LEGACY_USER), None);
    }

    #[test]
    fn test_hydrate_purges_corrupt_user() {
        let storage = MemoryStorage::new();
        storage.set(keys::ACADEMY_TOKEN, "tok-1");
        storage.set(keys::ACADEMY_USER, "{not json");
        storage.set(keys::LEGACY_TOKEN, "tok-old");
        storage.set(keys::LEGACY_USER, "also broken");

        let store = AcademyStore::new(MockAcademyApi::rejecting(), storage.clone());
        store.hydrate();

        let snapshot = store.snapshot();
        assert!(snapshot.user.is_none());
        assert!(snapshot.token.is_none());
        assert!(!snapshot.loading);
        for key in [
            keys::ACADEMY_TOKEN,
            keys::ACADEMY_USER,
            keys::LEGACY_TOKEN,
            keys::LEGACY_USER,
        ] {
            assert_eq!(storage.get(key), None, "key {key} should be purged");
        }
    }

    #[tokio::test]
    async fn test_login_persists_session() {
        let storage = MemoryStorage::new();
        let api = MockAcademyApi::accepting(sample_user(AcademyRole::Student));
        let store = AcademyStore::new(api, storage.clone());

        let user = store.login("a@b.com", "pw").await.unwrap();
        assert_eq!(user.email, "a@b.com");
        assert!(store.is_authenticated());
        assert_eq!(storage.get(keys::ACADEMY_TOKEN).as_deref(), Some("tok-1"));
        assert_eq!(
            storage.get(keys::ACADEMY_USER),
            Some(user_json(AcademyRole::Student))
        );
    }

    #[tokio::test]
    async fn test_login_failure_leaves_state_untouched() {
        let storage = MemoryStorage::new();
        let store = AcademyStore::new(MockAcademyApi::rejecting(), storage.clone());
        store.hydrate();

        let err = store.login("a@b.com", "wrong").await.unwrap_err();
        assert_eq!(err.to_string(), "Invalid email or password");
        assert!(store.snapshot().user.is_none());
        assert_eq!(storage.get(keys::ACADEMY_TOKEN), None);
    }

    #[tokio::test]
    async fn test_signup_signs_in_on_success() {
        let api = MockAcademyApi::accepting(sample_user(AcademyRole::Instructor));
        let store = AcademyStore::new(api.clone(), MemoryStorage::new());

        store
            .signup("Ada", "a@b.com", "pw", AcademyRole::Instructor)
            .await
            .unwrap();
        assert!(store.is_authenticated());
        assert_eq!(api.calls.lock().unwrap().as_slice(), ["signup a@b.com"]);
    }

    #[tokio::test]
    async fn test_logout_clears_storage_and_state() {
        let storage = MemoryStorage::new();
        let api = MockAcademyApi::accepting(sample_user(AcademyRole::Admin));
        let store = AcademyStore::new(api, storage.clone());
        store.login("a@b.com", "pw").await.unwrap();

        store.logout();
        assert!(!store.is_authenticated());
        assert_eq!(storage.get(keys::ACADEMY_TOKEN), None);
        assert_eq!(storage.get(keys::ACADEMY_USER), None);
    }

    #[tokio::test]
    async fn test_is_admin_tracks_role() {
        let store = AcademyStore::new(
            MockAcademyApi::accepting(sample_user(AcademyRole::Student)),
            MemoryStorage::new(),
        );
        assert!(!store.is_admin());

        store.login("a@b.com", "pw").await.unwrap();
        assert!(!store.is_admin());

        let admin_store = AcademyStore::new(
            MockAcademyApi::accepting(sample_user(AcademyRole::Admin)),
            MemoryStorage::new(),
        );
        admin_store.login("a@b.com", "pw").await.unwrap();
        assert!(admin_store.is_admin());
    }

    #[test]
    fn test_subscribers_observe_changes() {
        let storage = MemoryStorage::new();
        storage.set(keys::ACADEMY_TOKEN, "tok-1");
        storage.set(keys::ACADEMY_USER, &user_json(AcademyRole::Student));

        let store = AcademyStore::new(MockAcademyApi::rejecting(), storage);
        let notified = Arc::new(Mutex::new(0));
        let sink = notified.clone();
        store.subscribe(move || *sink.lock().unwrap() += 1);

        store.hydrate();
        store.logout();
        assert_eq!(*notified.lock().unwrap(), 2);
    }
}
