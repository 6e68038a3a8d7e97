//! The session store.
//!
//! Owns the in-memory principal, the durable credential file, and the token
//! installed on the shared API client. Every transition keeps the three in
//! agreement; the alert poller's lifetime is tied to the session through an
//! attached handle that logout shuts down.
//!
//! ## Behavior
//! - **login / register**: one POST; on success the token pair and principal
//!   land in memory and the durable file before the call returns.
//! - **restore**: two phases. The stored principal is adopted optimistically
//!   so the caller sees an authenticated session immediately, then the token
//!   is validated against `/auth/profile/`. A fresh principal replaces the
//!   snapshot; any failure tears the whole session down.
//! - **logout**: clears memory, uninstalls the token, deletes the file, and
//!   stops the poller. Always succeeds from the caller's perspective unless
//!   the file itself cannot be removed.

use std::sync::{Arc, RwLock};

use serde_json::Value;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::error::{SessionError, SessionResult};
use crate::poller::PollerHandle;
use crate::storage::{SessionStorage, StoredSession};
use shopgrid_api::endpoints::{LoginRequest, RegisterRequest};
use shopgrid_api::{ApiClient, ApiError};
use shopgrid_core::format::{format_error, GENERIC_ERROR};
use shopgrid_core::types::User;

/// Where the session currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// No principal.
    LoggedOut,
    /// A stored principal was adopted but the token is not yet validated.
    Restoring,
    /// The principal came from the backend during this process lifetime.
    Validated,
}

struct SessionState {
    user: Option<User>,
    phase: SessionPhase,
}

/// Authenticated-lifecycle owner. One per process, shared behind an `Arc`.
pub struct SessionStore {
    client: Arc<ApiClient>,
    storage: SessionStorage,
    state: RwLock<SessionState>,
    poller: Mutex<Option<PollerHandle>>,
}

impl SessionStore {
    pub fn new(client: Arc<ApiClient>, storage: SessionStorage) -> Self {
        SessionStore {
            client,
            storage,
            state: RwLock::new(SessionState {
                user: None,
                phase: SessionPhase::LoggedOut,
            }),
            poller: Mutex::new(None),
        }
    }

    /// The current principal, if any.
    pub fn current_user(&self) -> Option<User> {
        self.state.read().unwrap_or_else(|e| e.into_inner()).user.clone()
    }

    pub fn phase(&self) -> SessionPhase {
        self.state.read().unwrap_or_else(|e| e.into_inner()).phase
    }

    pub fn is_authenticated(&self) -> bool {
        self.phase() != SessionPhase::LoggedOut
    }

    /// Ties a running poller to this session; logout shuts it down.
    pub async fn attach_poller(&self, handle: PollerHandle) {
        let mut slot = self.poller.lock().await;
        if let Some(previous) = slot.replace(handle) {
            warn!("replacing an attached alert poller");
            previous.shutdown().await;
        }
    }

    /// Stops the attached poller, if any, without ending the session.
    pub async fn shutdown_poller(&self) {
        if let Some(poller) = self.poller.lock().await.take() {
            poller.shutdown().await;
        }
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Authenticates and establishes a session.
    pub async fn login(&self, username: &str, password: &str) -> SessionResult<User> {
        debug!(username, "logging in");
        let response = self
            .client
            .auth()
            .login(&LoginRequest {
                username: username.to_string(),
                password: password.to_string(),
            })
            .await
            .map_err(|e| SessionError::LoginFailed {
                message: login_message(&e),
            })?;

        self.establish(response.user.clone(), response.access, response.refresh)?;
        info!(username, role = %response.user.role, "logged in");
        Ok(response.user)
    }

    /// Registers a new account and establishes a session for it.
    pub async fn register(&self, request: &RegisterRequest) -> SessionResult<User> {
        debug!(username = %request.username, "registering");
        let response = self
            .client
            .auth()
            .register(request)
            .await
            .map_err(|e| SessionError::RegistrationFailed {
                message: e.formatted(),
            })?;

        self.establish(response.user.clone(), response.access, response.refresh)?;
        info!(username = %request.username, "registered");
        Ok(response.user)
    }

    /// Restores a previous session from the durable file, then validates it.
    ///
    /// Returns the validated principal, or `None` when there is nothing to
    /// restore or the stored token is no longer accepted. Either failure mode
    /// leaves the session fully logged out.
    pub async fn restore(&self) -> SessionResult<Option<User>> {
        // Phase 1: adopt the stored principal optimistically.
        let stored = match self.storage.load() {
            Ok(Some(stored)) => stored,
            Ok(None) => return Ok(None),
            Err(e) => {
                warn!(error = %e, "stored session unreadable, discarding");
                self.teardown().await?;
                return Ok(None);
            }
        };

        self.client.set_token(stored.access_token.clone());
        {
            let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
            state.user = Some(stored.user.clone());
            state.phase = SessionPhase::Restoring;
        }
        debug!(username = %stored.user.username, "session adopted, validating token");

        // Phase 2: validate against the backend. Any failure means the
        // session is dead; there is no partial recovery.
        match self.client.auth().profile().await {
            Ok(fresh) => {
                self.storage.save(&StoredSession {
                    access_token: stored.access_token,
                    refresh_token: stored.refresh_token,
                    user: fresh.clone(),
                })?;
                let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
                state.user = Some(fresh.clone());
                state.phase = SessionPhase::Validated;
                info!(username = %fresh.username, "session restored");
                Ok(Some(fresh))
            }
            Err(e) => {
                info!(error = %e, "stored session rejected, logging out");
                self.teardown().await?;
                Ok(None)
            }
        }
    }

    /// Re-fetches the principal from the backend and updates memory and the
    /// durable file. An authentication failure tears the session down before
    /// the error is returned.
    pub async fn refresh_user(&self) -> SessionResult<User> {
        if !self.is_authenticated() {
            return Err(SessionError::NotLoggedIn);
        }

        match self.client.auth().profile().await {
            Ok(fresh) => {
                if let Some(mut stored) = self.storage.load()? {
                    stored.user = fresh.clone();
                    self.storage.save(&stored)?;
                }
                let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
                state.user = Some(fresh.clone());
                state.phase = SessionPhase::Validated;
                Ok(fresh)
            }
            Err(e) if e.is_auth_failure() => {
                self.teardown().await?;
                Err(e.into())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Ends the session: memory, token, durable file, and poller.
    pub async fn logout(&self) -> SessionResult<()> {
        let username = self.current_user().map(|u| u.username);
        self.teardown().await?;
        if let Some(username) = username {
            info!(username, "logged out");
        }
        Ok(())
    }

    // =========================================================================
    // Internals
    // =========================================================================

    // Durable file first, then token and memory: a failed save must leave
    // the client exactly as logged out as the state says it is.
    fn establish(&self, user: User, access: String, refresh: String) -> SessionResult<()> {
        self.storage.save(&StoredSession {
            access_token: access.clone(),
            refresh_token: refresh,
            user: user.clone(),
        })?;
        self.client.set_token(access);
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        state.user = Some(user);
        state.phase = SessionPhase::Validated;
        Ok(())
    }

    async fn teardown(&self) -> SessionResult<()> {
        self.shutdown_poller().await;
        {
            let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
            state.user = None;
            state.phase = SessionPhase::LoggedOut;
        }
        self.client.clear_token();
        self.storage.clear()
    }
}

/// Message shown for a failed login. The backend answers bad credentials
/// with `{"error": "..."}`; anything else goes through the shared formatter.
fn login_message(error: &ApiError) -> String {
    let payload = match error {
        ApiError::Unauthorized { payload: Some(p) } => p,
        ApiError::Validation(p) => p,
        _ => return GENERIC_ERROR.to_string(),
    };
    match payload.get("error") {
        Some(Value::String(message)) => message.clone(),
        _ => format_error(payload),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use shopgrid_api::StubTransport;
    use shopgrid_core::types::Role;

    fn harness(dir: &tempfile::TempDir) -> (SessionStore, Arc<StubTransport>) {
        let stub = Arc::new(StubTransport::new());
        let client = Arc::new(ApiClient::with_transport(
            "http://test.local/api",
            stub.clone(),
        ));
        let storage = SessionStorage::new(dir.path().join("session.json"));
        (SessionStore::new(client, storage), stub)
    }

    fn login_body() -> Value {
        json!({
            "user": {"id": 1, "username": "alice", "role": "staff", "shop": 2},
            "access": "tok",
            "refresh": "rtok"
        })
    }

    #[tokio::test]
    async fn login_sets_principal_and_durable_file() {
        let dir = tempfile::tempdir().unwrap();
        let (store, stub) = harness(&dir);
        stub.push(200, login_body());

        let user = store.login("alice", "secret").await.unwrap();
        assert_eq!(user.role, Role::Staff);
        assert_eq!(store.phase(), SessionPhase::Validated);

        // Durable file agrees with memory
        let stored = SessionStorage::new(dir.path().join("session.json"))
            .load()
            .unwrap()
            .unwrap();
        assert_eq!(stored.access_token, "tok");
        assert_eq!(stored.user.username, "alice");
    }

    #[tokio::test]
    async fn failed_login_surfaces_backend_message_and_stores_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let (store, stub) = harness(&dir);
        stub.push(401, json!({"error": "Invalid credentials"}));

        let err = store.login("alice", "wrong").await.unwrap_err();
        assert_eq!(err.to_string(), "Invalid credentials");
        assert_eq!(store.phase(), SessionPhase::LoggedOut);
        assert!(store.current_user().is_none());
        assert!(!dir.path().join("session.json").exists());
    }

    #[tokio::test]
    async fn failed_persist_installs_no_token() {
        let dir = tempfile::tempdir().unwrap();
        // A file where the session directory should be makes every save fail.
        std::fs::write(dir.path().join("blocked"), "x").unwrap();

        let stub = Arc::new(StubTransport::new());
        let client = Arc::new(ApiClient::with_transport(
            "http://test.local/api",
            stub.clone(),
        ));
        let storage = SessionStorage::new(dir.path().join("blocked/session.json"));
        let store = SessionStore::new(client.clone(), storage);

        stub.push(200, login_body());
        let err = store.login("alice", "secret").await;

        assert!(matches!(err, Err(SessionError::Storage(_))));
        assert_eq!(store.phase(), SessionPhase::LoggedOut);
        assert!(store.current_user().is_none());
        // The client must agree with the logged-out state
        assert_eq!(client.token(), None);
    }

    #[tokio::test]
    async fn logout_clears_memory_and_file() {
        let dir = tempfile::tempdir().unwrap();
        let (store, stub) = harness(&dir);
        stub.push(200, login_body());

        store.login("alice", "secret").await.unwrap();
        store.logout().await.unwrap();

        assert_eq!(store.phase(), SessionPhase::LoggedOut);
        assert!(store.current_user().is_none());
        assert!(!dir.path().join("session.json").exists());
    }

    #[tokio::test]
    async fn restore_without_a_file_is_a_no_op() {
        let dir = tempfile::tempdir().unwrap();
        let (store, stub) = harness(&dir);

        assert!(store.restore().await.unwrap().is_none());
        assert!(stub.requests().is_empty());
    }

    #[tokio::test]
    async fn restore_validates_and_adopts_the_fresh_principal() {
        let dir = tempfile::tempdir().unwrap();
        let (store, stub) = harness(&dir);
        stub.push(200, login_body());
        store.login("alice", "secret").await.unwrap();

        // New process: same file, fresh store. The profile answer carries a
        // changed shop assignment that must win over the snapshot.
        let (store, stub) = harness(&dir);
        stub.push(
            200,
            json!({"id": 1, "username": "alice", "role": "staff", "shop": 9}),
        );

        let user = store.restore().await.unwrap().unwrap();
        assert_eq!(user.shop_id(), Some(9));
        assert_eq!(store.phase(), SessionPhase::Validated);

        // The validation request used the stored token
        let req = stub.last_request().unwrap();
        assert_eq!(req.url, "http://test.local/api/auth/profile/");
        assert_eq!(req.bearer.as_deref(), Some("tok"));
    }

    #[tokio::test]
    async fn rejected_restore_tears_the_session_down() {
        let dir = tempfile::tempdir().unwrap();
        let (store, stub) = harness(&dir);
        stub.push(200, login_body());
        store.login("alice", "secret").await.unwrap();

        let (store, stub) = harness(&dir);
        stub.push(401, json!({"detail": "Token expired"}));

        assert!(store.restore().await.unwrap().is_none());
        assert_eq!(store.phase(), SessionPhase::LoggedOut);
        assert!(!dir.path().join("session.json").exists());
    }

    #[tokio::test]
    async fn refresh_user_updates_memory_and_file() {
        let dir = tempfile::tempdir().unwrap();
        let (store, stub) = harness(&dir);
        stub.push(200, login_body());
        store.login("alice", "secret").await.unwrap();

        stub.push(
            200,
            json!({"id": 1, "username": "alice", "role": "sales_manager", "shop": 4}),
        );
        let fresh = store.refresh_user().await.unwrap();
        assert_eq!(fresh.role, Role::SalesManager);

        let stored = SessionStorage::new(dir.path().join("session.json"))
            .load()
            .unwrap()
            .unwrap();
        assert_eq!(stored.user.shop_id(), Some(4));
        // Token pair untouched by a profile refresh
        assert_eq!(stored.access_token, "tok");
    }
}
