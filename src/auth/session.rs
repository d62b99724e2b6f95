//! Mock session store: login, registration, logout, password reset and restore
//!
//! State moves `Anonymous -> Authenticating -> Authenticated` and back to `Anonymous`
//! on logout. Each operation waits out a configured delay standing in for network
//! latency. Operations are serialised per store, so overlapping submissions never
//! race on persisted storage.

use log::{debug, error, info, warn};
use tokio::sync::{watch, Mutex};

use super::clock::{Clock, SystemClock};
use super::error::{AuthError, AuthOutcome};
use super::repository::UserRepository;
use super::storage::{KeyValueStore, TOKEN_KEY, USER_KEY};
use super::token::SessionToken;
use super::user::{RegisterRequest, Role, User, UserRecord};
use super::validation::{is_valid_email, validate_login, validate_registration};
use crate::config::KaizenConfig;

pub const LOGIN_SUCCESS_MESSAGE: &str = "Login successful!";
pub const REGISTER_SUCCESS_MESSAGE: &str = "Account created successfully! Welcome to Kaizen!";
pub const REGISTER_LOGIN_FAILED_MESSAGE: &str = "Account created, but automatic login failed";
/// Same text whether or not the address is registered
pub const RESET_REQUESTED_MESSAGE: &str =
    "If this email is registered, you will receive a recovery link";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Anonymous,
    /// A login or registration is waiting on its delay
    Authenticating,
    Authenticated(User),
}

/// What `restore` found in storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestoreOutcome {
    /// User or token missing
    NoSession,
    Restored(User),
    /// Token past its expiry; storage cleared
    Expired,
    /// Unreadable user or token; storage cleared
    Corrupted,
}

/// Result of a successful registration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Registration {
    /// Account created and signed in
    LoggedIn(User),
    /// Account created, but the follow-up login failed
    LoginFailed(AuthError),
}

pub struct SessionStore<R, S, C = SystemClock> {
    repository: R,
    storage: S,
    clock: C,
    config: KaizenConfig,
    state: watch::Sender<SessionState>,
    busy: Mutex<()>,
}

impl<R, S> SessionStore<R, S, SystemClock>
where
    R: UserRepository,
    S: KeyValueStore,
{
    pub fn new(repository: R, storage: S, config: KaizenConfig) -> Self {
        Self::with_clock(repository, storage, SystemClock, config)
    }
}

impl<R, S, C> SessionStore<R, S, C>
where
    R: UserRepository,
    S: KeyValueStore,
    C: Clock,
{
    pub fn with_clock(repository: R, storage: S, clock: C, config: KaizenConfig) -> Self {
        let (state, _) = watch::channel(SessionState::Anonymous);
        Self {
            repository,
            storage,
            clock,
            config,
            state,
            busy: Mutex::new(()),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    /// Receiver notified on every state change
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    pub fn current_user(&self) -> Option<User> {
        match &*self.state.borrow() {
            SessionState::Authenticated(user) => Some(user.clone()),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user().is_some()
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn config(&self) -> &KaizenConfig {
        &self.config
    }

    pub async fn login(&self, email: &str, password: &str) -> AuthOutcome {
        match self.try_login(email, password).await {
            Ok(user) => {
                info!("User {} logged in", user.id);
                AuthOutcome::ok(LOGIN_SUCCESS_MESSAGE)
            }
            Err(err) => report("login", &err),
        }
    }

    /// `login` with the typed error
    pub async fn try_login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let _busy = self.busy.lock().await;
        let previous = self.begin();
        self.login_after(previous, email, password).await
    }

    pub async fn register(&self, request: &RegisterRequest) -> AuthOutcome {
        match self.try_register(request).await {
            Ok(Registration::LoggedIn(_)) => AuthOutcome::ok(REGISTER_SUCCESS_MESSAGE),
            Ok(Registration::LoginFailed(err)) => {
                warn!("Automatic login after registration failed: {}", err);
                AuthOutcome::failed(REGISTER_LOGIN_FAILED_MESSAGE)
            }
            Err(err) => report("register", &err),
        }
    }

    /// `register` with the typed error; `Ok` means the account exists now
    pub async fn try_register(&self, request: &RegisterRequest) -> Result<Registration, AuthError> {
        let _busy = self.busy.lock().await;
        let previous = self.begin();

        tokio::time::sleep(self.config.register_delay()).await;

        let record = match self.create_account(request) {
            Ok(record) => record,
            Err(err) => {
                self.state.send_replace(previous);
                return Err(err);
            }
        };
        info!("Registered user {} ({})", record.id, record.company_name);

        match self.login_after(previous, &request.email, &request.password).await {
            Ok(user) => Ok(Registration::LoggedIn(user)),
            Err(err) => Ok(Registration::LoginFailed(err)),
        }
    }

    /// Clears in-memory and persisted session state unconditionally
    pub async fn logout(&self) {
        let _busy = self.busy.lock().await;
        self.clear_persisted();
        self.state.send_replace(SessionState::Anonymous);
        info!("Logged out");
    }

    /// Always success-shaped for a well-formed address, registered or not
    pub async fn forgot_password(&self, email: &str) -> AuthOutcome {
        let _busy = self.busy.lock().await;
        tokio::time::sleep(self.config.forgot_password_delay()).await;

        match self.request_reset(email) {
            Ok(()) => AuthOutcome::ok(RESET_REQUESTED_MESSAGE),
            Err(err) => report("forgot_password", &err),
        }
    }

    /// Reload the persisted session, discarding it when expired or unreadable
    pub async fn restore(&self) -> RestoreOutcome {
        let _busy = self.busy.lock().await;

        let stored = (self.storage.get(USER_KEY), self.storage.get(TOKEN_KEY));
        let (user_raw, token_raw) = match stored {
            (Ok(Some(user)), Ok(Some(token))) => (user, token),
            (Ok(_), Ok(_)) => {
                debug!("No persisted session");
                return RestoreOutcome::NoSession;
            }
            (Err(err), _) | (_, Err(err)) => {
                error!("Failed to read persisted session: {}", err);
                self.discard();
                return RestoreOutcome::Corrupted;
            }
        };

        match decode_session(&user_raw, &token_raw) {
            Ok((_, token)) if token.is_expired(self.clock.now()) => {
                info!("Persisted session for user {} expired", token.user_id);
                self.discard();
                RestoreOutcome::Expired
            }
            Ok((user, _)) => {
                info!("Restored session for user {}", user.id);
                self.state.send_replace(SessionState::Authenticated(user.clone()));
                RestoreOutcome::Restored(user)
            }
            Err(err) => {
                error!("Failed to restore session: {}", err);
                self.discard();
                RestoreOutcome::Corrupted
            }
        }
    }

    /// Enter `Authenticating`, returning the state to fall back to on failure
    fn begin(&self) -> SessionState {
        self.state.send_replace(SessionState::Authenticating)
    }

    async fn login_after(
        &self,
        previous: SessionState,
        email: &str,
        password: &str,
    ) -> Result<User, AuthError> {
        tokio::time::sleep(self.config.login_delay()).await;

        let record = match self.verify_credentials(email, password) {
            Ok(record) => record,
            Err(err) => {
                self.state.send_replace(previous);
                return Err(err);
            }
        };

        let token = SessionToken::issue(&record, self.clock.now(), self.config.token_ttl());
        let user = record.to_public();

        // Leaves memory and storage both empty
        if let Err(err) = self.persist(&user, &token) {
            self.discard();
            return Err(err);
        }

        self.state.send_replace(SessionState::Authenticated(user.clone()));
        Ok(user)
    }

    fn verify_credentials(&self, email: &str, password: &str) -> Result<UserRecord, AuthError> {
        validate_login(email, password)?;

        self.repository
            .find_by_email(email)?
            .filter(|r| r.matches_credentials(email, password))
            .ok_or(AuthError::InvalidCredentials)
    }

    fn persist(&self, user: &User, token: &SessionToken) -> Result<(), AuthError> {
        let user_json = serde_json::to_string(user)?;
        let encoded = token.encode()?;
        self.storage.set(USER_KEY, &user_json)?;
        self.storage.set(TOKEN_KEY, &encoded)?;
        Ok(())
    }

    fn create_account(&self, request: &RegisterRequest) -> Result<UserRecord, AuthError> {
        validate_registration(request)?;

        if self.repository.exists_by_email(&request.email)? {
            return Err(AuthError::Conflict("This email is already registered".to_string()));
        }
        if self.repository.exists_by_tax_id(&request.tax_id)? {
            return Err(AuthError::Conflict("This tax ID is already registered".to_string()));
        }

        let record = UserRecord {
            id: self.repository.next_id()?,
            email: request.email.clone(),
            password: request.password.clone(),
            company_name: request.company_name.clone(),
            tax_id: Some(request.tax_id.clone()),
            role: Role::Admin,
            created_at: self.clock.now(),
        };
        self.repository.insert(record.clone())?;
        Ok(record)
    }

    fn request_reset(&self, email: &str) -> Result<(), AuthError> {
        if email.is_empty() || !is_valid_email(email) {
            return Err(AuthError::validation("Invalid email"));
        }

        if self.repository.exists_by_email(email)? {
            info!("Password recovery link sent to {}", email);
        } else {
            debug!("Password recovery requested for an unregistered address");
        }
        Ok(())
    }

    fn discard(&self) {
        self.clear_persisted();
        self.state.send_replace(SessionState::Anonymous);
    }

    fn clear_persisted(&self) {
        for key in [USER_KEY, TOKEN_KEY] {
            if let Err(err) = self.storage.remove(key) {
                warn!("Failed to remove {} from storage: {}", key, err);
            }
        }
    }
}

fn decode_session(user_raw: &str, token_raw: &str) -> Result<(User, SessionToken), AuthError> {
    let user: User = serde_json::from_str(user_raw)
        .map_err(|e| AuthError::CorruptedSession(format!("persisted user: {}", e)))?;
    let token = SessionToken::decode(token_raw)?;
    if token.user_id != user.id {
        return Err(AuthError::CorruptedSession(format!(
            "token for user {} stored with user {}",
            token.user_id, user.id
        )));
    }
    Ok((user, token))
}

fn report(operation: &str, err: &AuthError) -> AuthOutcome {
    match err {
        AuthError::Internal(_) | AuthError::CorruptedSession(_) => {
            error!("{} failed: {}", operation, err)
        }
        _ => debug!("{} rejected: {}", operation, err),
    }
    AuthOutcome::from(err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::clock::FixedClock;
    use crate::auth::repository::InMemoryUserRepository;
    use crate::auth::storage::MemoryStore;
    use crate::error::{Error, Result};
    use chrono::{DateTime, TimeZone, Utc};
    use std::sync::Arc;

    type TestStore =
        SessionStore<Arc<InMemoryUserRepository>, Arc<MemoryStore>, Arc<FixedClock>>;

    fn issued_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 9, 30, 0).unwrap()
    }

    struct Fixture {
        store: TestStore,
        repository: Arc<InMemoryUserRepository>,
        storage: Arc<MemoryStore>,
        clock: Arc<FixedClock>,
    }

    impl Fixture {
        fn with_repository(repository: InMemoryUserRepository) -> Self {
            let repository = Arc::new(repository);
            let storage = Arc::new(MemoryStore::new());
            let clock = Arc::new(FixedClock::new(issued_at()));
            let store = SessionStore::with_clock(
                Arc::clone(&repository),
                Arc::clone(&storage),
                Arc::clone(&clock),
                KaizenConfig::instant(),
            );
            Self {
                store,
                repository,
                storage,
                clock,
            }
        }

        fn seeded() -> Self {
            Self::with_repository(InMemoryUserRepository::seeded())
        }

        /// Another store over the same repository, storage and clock (a page reload)
        fn reopen(&self) -> TestStore {
            SessionStore::with_clock(
                Arc::clone(&self.repository),
                Arc::clone(&self.storage),
                Arc::clone(&self.clock),
                KaizenConfig::instant(),
            )
        }
    }

    fn registration(email: &str, tax_id: &str) -> RegisterRequest {
        RegisterRequest {
            email: email.to_string(),
            password: "segredo".to_string(),
            confirm_password: "segredo".to_string(),
            company_name: "Padaria Central".to_string(),
            tax_id: tax_id.to_string(),
        }
    }

    #[tokio::test]
    async fn test_seeded_admin_login() {
        let fx = Fixture::seeded();

        let outcome = fx.store.login("admin@empresa.com", "123456").await;
        assert_eq!(outcome, AuthOutcome::ok(LOGIN_SUCCESS_MESSAGE));

        let user = fx.store.current_user().unwrap();
        assert_eq!(user.id, "1");
        assert_eq!(user.company_name, "Empresa Demo Ltda");

        let raw = fx.storage.get(TOKEN_KEY).unwrap().unwrap();
        let token = SessionToken::decode(&raw).unwrap();
        assert_eq!(token.user_id, "1");
        assert_eq!(token.email, "admin@empresa.com");
        assert_eq!(token.exp, issued_at().timestamp() + 24 * 60 * 60);

        let raw_user = fx.storage.get(USER_KEY).unwrap().unwrap();
        let persisted: User = serde_json::from_str(&raw_user).unwrap();
        assert_eq!(persisted, user);
    }

    #[tokio::test]
    async fn test_bad_credentials_are_indistinguishable() {
        let fx = Fixture::seeded();

        let wrong_password = fx.store.login("admin@empresa.com", "654321").await;
        let unknown_email = fx.store.login("nobody@empresa.com", "123456").await;

        assert!(!wrong_password.success);
        assert_eq!(wrong_password, unknown_email);
        assert_eq!(fx.store.state(), SessionState::Anonymous);
        assert_eq!(fx.storage.get(TOKEN_KEY).unwrap(), None);
    }

    #[tokio::test]
    async fn test_login_validation() {
        let fx = Fixture::seeded();
        assert_eq!(
            fx.store.try_login("admin", "123456").await,
            Err(AuthError::validation("Invalid email"))
        );
        assert_eq!(
            fx.store.try_login("admin@empresa.com", "123").await,
            Err(AuthError::validation("Password must be at least 6 characters"))
        );
        assert_eq!(
            fx.store.try_login("", "").await,
            Err(AuthError::validation("Email and password are required"))
        );
    }

    #[tokio::test]
    async fn test_failed_login_keeps_existing_session() {
        let fx = Fixture::seeded();
        fx.store.login("admin@empresa.com", "123456").await;

        let outcome = fx.store.login("admin@empresa.com", "wrong-password").await;
        assert!(!outcome.success);
        assert!(fx.store.is_authenticated());
    }

    #[tokio::test]
    async fn test_register_rejects_unpunctuated_tax_id() {
        let fx = Fixture::with_repository(InMemoryUserRepository::empty());

        let outcome = fx.store.register(&registration("owner@padaria.com", "12345678000190")).await;
        assert!(!outcome.success);
        assert!(outcome.message.starts_with("Invalid tax ID"));
        assert!(fx.repository.is_empty());

        let outcome = fx
            .store
            .register(&registration("owner@padaria.com", "12.345.678/0001-90"))
            .await;
        assert_eq!(outcome, AuthOutcome::ok(REGISTER_SUCCESS_MESSAGE));
        assert_eq!(fx.repository.len(), 1);
    }

    #[tokio::test]
    async fn test_register_logs_in_new_account() {
        let fx = Fixture::seeded();

        let result = fx
            .store
            .try_register(&registration("owner@padaria.com", "98.765.432/0001-10"))
            .await
            .unwrap();

        let Registration::LoggedIn(user) = result else {
            panic!("expected automatic login, got {:?}", result);
        };
        assert_eq!(user.id, "2");
        assert_eq!(user.role, Role::Admin);
        assert_eq!(user.created_at, issued_at());
        assert_eq!(fx.store.current_user(), Some(user));
        assert!(fx.storage.get(TOKEN_KEY).unwrap().is_some());
    }

    #[tokio::test]
    async fn test_duplicate_email_does_not_touch_repository() {
        let fx = Fixture::seeded();
        let before = fx.repository.all();

        let outcome = fx
            .store
            .register(&registration("admin@empresa.com", "98.765.432/0001-10"))
            .await;

        assert_eq!(outcome, AuthOutcome::failed("This email is already registered"));
        assert_eq!(fx.repository.all(), before);
        assert_eq!(fx.store.state(), SessionState::Anonymous);
    }

    #[tokio::test]
    async fn test_duplicate_tax_id_is_conflict() {
        let fx = Fixture::seeded();
        let result = fx
            .store
            .try_register(&registration("other@empresa.com", "12.345.678/0001-90"))
            .await;
        assert_eq!(
            result,
            Err(AuthError::Conflict("This tax ID is already registered".to_string()))
        );
        assert_eq!(fx.repository.len(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_registrations_are_serialised() {
        let fx = Fixture::seeded();
        let request = registration("owner@padaria.com", "98.765.432/0001-10");

        let (first, second) =
            tokio::join!(fx.store.register(&request), fx.store.register(&request));

        assert_eq!(
            [first.success, second.success].iter().filter(|s| **s).count(),
            1
        );
        assert_eq!(fx.repository.len(), 2);
    }

    #[tokio::test]
    async fn test_forgot_password_never_reveals_accounts() {
        let fx = Fixture::seeded();

        let known = fx.store.forgot_password("admin@empresa.com").await;
        let unknown = fx.store.forgot_password("ghost@empresa.com").await;

        assert_eq!(unknown, AuthOutcome::ok(RESET_REQUESTED_MESSAGE));
        assert_eq!(known, unknown);

        let invalid = fx.store.forgot_password("ghost").await;
        assert_eq!(invalid, AuthOutcome::failed("Invalid email"));
    }

    #[tokio::test]
    async fn test_logout_clears_everything() {
        let fx = Fixture::seeded();
        fx.store.login("admin@empresa.com", "123456").await;

        fx.store.logout().await;
        assert_eq!(fx.store.state(), SessionState::Anonymous);
        assert_eq!(fx.storage.get(USER_KEY).unwrap(), None);
        assert_eq!(fx.storage.get(TOKEN_KEY).unwrap(), None);

        // Logging out twice is harmless
        fx.store.logout().await;
    }

    #[tokio::test]
    async fn test_restore_after_reload() {
        let fx = Fixture::seeded();
        assert_eq!(fx.store.restore().await, RestoreOutcome::NoSession);

        fx.store.login("admin@empresa.com", "123456").await;
        let reloaded = fx.reopen();
        assert_eq!(reloaded.state(), SessionState::Anonymous);

        let outcome = reloaded.restore().await;
        let RestoreOutcome::Restored(user) = outcome else {
            panic!("expected a restored session, got {:?}", outcome);
        };
        assert_eq!(user.email, "admin@empresa.com");
        assert!(reloaded.is_authenticated());
    }

    #[tokio::test]
    async fn test_restore_discards_expired_token() {
        let fx = Fixture::seeded();
        fx.store.login("admin@empresa.com", "123456").await;

        fx.clock.advance(chrono::Duration::hours(23));
        assert!(matches!(fx.reopen().restore().await, RestoreOutcome::Restored(_)));

        fx.clock.advance(chrono::Duration::hours(1));
        let reloaded = fx.reopen();
        assert_eq!(reloaded.restore().await, RestoreOutcome::Expired);
        assert_eq!(reloaded.state(), SessionState::Anonymous);
        assert_eq!(fx.storage.get(USER_KEY).unwrap(), None);
        assert_eq!(fx.storage.get(TOKEN_KEY).unwrap(), None);
    }

    #[tokio::test]
    async fn test_restore_discards_corrupted_session() {
        let fx = Fixture::seeded();
        fx.store.login("admin@empresa.com", "123456").await;
        fx.storage.set(TOKEN_KEY, "%%% not a token %%%").unwrap();

        let reloaded = fx.reopen();
        assert_eq!(reloaded.restore().await, RestoreOutcome::Corrupted);
        assert_eq!(fx.storage.get(USER_KEY).unwrap(), None);

        fx.store.login("admin@empresa.com", "123456").await;
        fx.storage.set(USER_KEY, "{\"id\": 1}").unwrap();
        assert_eq!(fx.reopen().restore().await, RestoreOutcome::Corrupted);
    }

    #[tokio::test]
    async fn test_restore_rejects_token_for_other_user() {
        let fx = Fixture::seeded();
        fx.store.login("admin@empresa.com", "123456").await;

        let foreign = SessionToken {
            user_id: "99".to_string(),
            email: "admin@empresa.com".to_string(),
            exp: issued_at().timestamp() + 3600,
        };
        fx.storage.set(TOKEN_KEY, &foreign.encode().unwrap()).unwrap();

        assert_eq!(fx.reopen().restore().await, RestoreOutcome::Corrupted);
    }

    /// Storage that refuses writes
    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Ok(None)
        }

        fn set(&self, key: &str, _value: &str) -> Result<()> {
            Err(Error::Storage(format!("{} is read-only", key)))
        }

        fn remove(&self, _key: &str) -> Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_storage_failure_is_internal_error() {
        let store = SessionStore::new(
            InMemoryUserRepository::seeded(),
            ReadOnlyStore,
            KaizenConfig::instant(),
        );

        let outcome = store.login("admin@empresa.com", "123456").await;
        assert_eq!(
            outcome,
            AuthOutcome::failed(crate::auth::error::INTERNAL_ERROR_MESSAGE)
        );
        assert_eq!(store.state(), SessionState::Anonymous);

        // The account is still created even though the follow-up login cannot persist
        let outcome = store
            .register(&registration("owner@padaria.com", "98.765.432/0001-10"))
            .await;
        assert_eq!(outcome, AuthOutcome::failed(REGISTER_LOGIN_FAILED_MESSAGE));
        assert_eq!(store.repository().len(), 2);
    }

    /// Memory store whose writes can be switched off mid-test
    #[derive(Default)]
    struct SwitchableStore {
        inner: MemoryStore,
        refuse_writes: std::sync::atomic::AtomicBool,
    }

    impl KeyValueStore for SwitchableStore {
        fn get(&self, key: &str) -> Result<Option<String>> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<()> {
            if self.refuse_writes.load(std::sync::atomic::Ordering::SeqCst) {
                return Err(Error::Storage(format!("{} is read-only", key)));
            }
            self.inner.set(key, value)
        }

        fn remove(&self, key: &str) -> Result<()> {
            self.inner.remove(key)
        }
    }

    #[tokio::test]
    async fn test_failed_save_signs_out_existing_session() {
        let storage = Arc::new(SwitchableStore::default());
        let store = SessionStore::new(
            InMemoryUserRepository::seeded(),
            Arc::clone(&storage),
            KaizenConfig::instant(),
        );
        assert!(store.login("admin@empresa.com", "123456").await.success);

        storage
            .refuse_writes
            .store(true, std::sync::atomic::Ordering::SeqCst);
        let outcome = store.login("admin@empresa.com", "123456").await;

        assert_eq!(
            outcome,
            AuthOutcome::failed(crate::auth::error::INTERNAL_ERROR_MESSAGE)
        );
        assert_eq!(store.state(), SessionState::Anonymous);
        assert_eq!(storage.get(USER_KEY).unwrap(), None);
        assert_eq!(storage.get(TOKEN_KEY).unwrap(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_login_waits_out_configured_delay() {
        let store = SessionStore::new(
            InMemoryUserRepository::seeded(),
            MemoryStore::new(),
            KaizenConfig::default(),
        );
        let mut states = store.subscribe();
        let started = tokio::time::Instant::now();

        let (outcome, observed) = tokio::join!(
            store.login("admin@empresa.com", "123456"),
            async {
                let _ = states.changed().await;
                let seen = states.borrow().clone();
                seen
            }
        );

        assert!(outcome.success);
        assert_eq!(observed, SessionState::Authenticating);
        assert!(started.elapsed() >= std::time::Duration::from_millis(1500));
    }
}
