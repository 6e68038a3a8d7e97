//! # shopgrid-session: Authenticated Lifecycle
//!
//! Everything that happens between login and logout lives here: the session
//! store that owns the principal and its durable credential file, and the
//! alert poller that watches for unread inventory alerts while a session is
//! active.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Session Lifecycle                                 │
//! │                                                                         │
//! │   startup ──► restore (two phases)                                      │
//! │                 1. load durable file, adopt principal optimistically    │
//! │                 2. GET /auth/profile/ with the stored token             │
//! │                    • fresh principal ──► session validated             │
//! │                    • any failure     ──► full logout (memory + file)   │
//! │                                                                         │
//! │   login ──► store token + principal in memory AND the durable file,     │
//! │             atomically from the caller's perspective                    │
//! │                                                                         │
//! │   logout ──► clear memory, delete file, stop the poller                 │
//! │                                                                         │
//! │   INVARIANT: memory and the durable file never disagree for longer      │
//! │   than a single store operation.                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The poller is owned by the session: it starts after a validated login or
//! restore and its shutdown is triggered exactly once at logout and awaited.

pub mod error;
pub mod poller;
pub mod storage;
pub mod store;

pub use error::{SessionError, SessionResult};
pub use poller::{AlertNotifier, AlertPoller, NoOpNotifier, PollerHandle};
pub use storage::{SessionStorage, StoredSession};
pub use store::{SessionPhase, SessionStore};
