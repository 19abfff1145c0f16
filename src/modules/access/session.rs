use std::sync::{Mutex, MutexGuard};

use serde::Serialize;
use tracing::debug;
use utoipa::ToSchema;

use estoque_models::{AccessState, UserId};

use super::resolver::{AccessError, resolve};
use super::store::AccessStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AccessPhase {
    Idle,
    Loading,
    Resolved,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct AccessSnapshot {
    pub phase: AccessPhase,
    pub identity: Option<UserId>,
    #[serde(flatten)]
    pub state: AccessState,
    pub error: Option<String>,
}

/// Handed out by [`AccessSession::begin`]; only the ticket of the latest
/// `begin` may complete the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolutionTicket {
    generation: u64,
    identity: Option<UserId>,
}

impl ResolutionTicket {
    pub fn identity(&self) -> Option<UserId> {
        self.identity
    }
}

#[derive(Debug)]
struct Inner {
    generation: u64,
    phase: AccessPhase,
    identity: Option<UserId>,
    state: AccessState,
    error: Option<String>,
}

/// Holds the access state for whoever is currently signed in.
///
/// Every identity change calls [`begin`](Self::begin), which bumps the
/// generation. A resolution that finishes after a newer `begin` is dropped,
/// so a slow lookup for a previous user can never overwrite the current
/// one. A failed lookup keeps the last-known permissions for the same
/// identity and clears `loading`.
#[derive(Debug)]
pub struct AccessSession {
    inner: Mutex<Inner>,
}

impl Default for AccessSession {
    fn default() -> Self {
        Self::new()
    }
}

impl AccessSession {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                generation: 0,
                phase: AccessPhase::Idle,
                identity: None,
                state: AccessState::anonymous(),
                error: None,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn begin(&self, identity: Option<UserId>) -> ResolutionTicket {
        let mut inner = self.lock();
        inner.generation += 1;
        inner.error = None;

        match identity {
            None => {
                inner.phase = AccessPhase::Idle;
                inner.state = AccessState::anonymous();
            }
            Some(_) => {
                if inner.identity != identity {
                    inner.state = AccessState::anonymous();
                }
                inner.phase = AccessPhase::Loading;
                inner.state.loading = true;
            }
        }
        inner.identity = identity;

        ResolutionTicket {
            generation: inner.generation,
            identity,
        }
    }

    /// Returns `false` when the ticket is stale and the outcome was dropped.
    pub fn complete(
        &self,
        ticket: ResolutionTicket,
        outcome: Result<AccessState, AccessError>,
    ) -> bool {
        let mut inner = self.lock();
        if ticket.generation != inner.generation {
            debug!(
                ticket = ticket.generation,
                current = inner.generation,
                "Discarding stale access resolution"
            );
            return false;
        }

        match outcome {
            Ok(state) => {
                inner.state = state;
                inner.phase = if ticket.identity.is_some() {
                    AccessPhase::Resolved
                } else {
                    AccessPhase::Idle
                };
            }
            Err(e) => {
                inner.state.loading = false;
                inner.phase = AccessPhase::Failed;
                inner.error = Some(e.to_string());
            }
        }
        true
    }

    /// Begins, resolves and completes in one go.
    pub async fn refresh<S>(&self, store: &S, identity: Option<UserId>) -> AccessSnapshot
    where
        S: AccessStore + ?Sized,
    {
        let ticket = self.begin(identity);
        if identity.is_some() {
            let outcome = resolve(store, identity).await;
            self.complete(ticket, outcome);
        }
        self.snapshot()
    }

    pub fn snapshot(&self) -> AccessSnapshot {
        let inner = self.lock();
        AccessSnapshot {
            phase: inner.phase,
            identity: inner.identity,
            state: inner.state,
            error: inner.error.clone(),
        }
    }

    pub fn state(&self) -> AccessState {
        self.lock().state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use estoque_models::{PermissionSet, default_permissions};

    #[test]
    fn test_new_session_is_idle_and_anonymous() {
        let snapshot = AccessSession::new().snapshot();
        assert_eq!(snapshot.phase, AccessPhase::Idle);
        assert_eq!(snapshot.state, AccessState::anonymous());
    }

    #[test]
    fn test_begin_marks_loading() {
        let session = AccessSession::new();
        session.begin(Some(UserId::new()));
        let snapshot = session.snapshot();
        assert_eq!(snapshot.phase, AccessPhase::Loading);
        assert!(snapshot.state.loading);
        assert_eq!(snapshot.state.permissions, None);
    }

    #[test]
    fn test_stale_ticket_is_dropped() {
        let session = AccessSession::new();
        let first = session.begin(Some(UserId::new()));
        let second = session.begin(Some(UserId::new()));

        assert!(!session.complete(
            first,
            Ok(AccessState::resolved(true, PermissionSet::all_granted()))
        ));
        assert!(session.state().loading);

        assert!(session.complete(
            second,
            Ok(AccessState::resolved(false, default_permissions()))
        ));
        let state = session.state();
        assert!(!state.is_admin);
        assert!(!state.loading);
    }

    #[test]
    fn test_sign_out_resets_immediately() {
        let session = AccessSession::new();
        let ticket = session.begin(Some(UserId::new()));
        session.complete(
            ticket,
            Ok(AccessState::resolved(true, PermissionSet::all_granted())),
        );

        session.begin(None);
        assert_eq!(session.state(), AccessState::anonymous());
        assert_eq!(session.snapshot().phase, AccessPhase::Idle);
    }
}
