use std::sync::{Arc, RwLock};

use log::{debug, info};

use crate::errors::{Error, Result};
use crate::events::{StoreEvent, StoreEventSink};

use super::session_model::{Action, Role, Session};
use super::session_traits::{SessionRepositoryTrait, SessionServiceTrait};

/// Session store backed by an injected token repository.
///
/// Every mutation writes the repository first and only then updates the
/// in-memory session, so the persisted token always reflects the last
/// completed login/logout.
pub struct SessionService {
    repository: Arc<dyn SessionRepositoryTrait>,
    state: RwLock<Session>,
    event_sink: Arc<dyn StoreEventSink>,
}

impl SessionService {
    /// Builds the store from whatever token is currently persisted.
    pub fn new(
        repository: Arc<dyn SessionRepositoryTrait>,
        event_sink: Arc<dyn StoreEventSink>,
    ) -> Result<Self> {
        let token = repository.get_token()?;
        let session = Session::from_token(token.as_deref());
        debug!(
            "Session initialized: role={}, authenticated={}",
            session.role, session.is_authenticated
        );
        Ok(Self {
            repository,
            state: RwLock::new(session),
            event_sink,
        })
    }

    fn replace(&self, session: Session) -> Result<()> {
        let mut guard = self
            .state
            .write()
            .map_err(|e| Error::Unexpected(e.to_string()))?;
        *guard = session.clone();
        drop(guard);

        self.event_sink.emit(StoreEvent::SessionChanged {
            role: session.role,
            is_authenticated: session.is_authenticated,
        });
        Ok(())
    }
}

impl SessionServiceTrait for SessionService {
    fn get_role(&self) -> Result<Role> {
        let token = self.repository.get_token()?;
        Ok(Role::from_token(token.as_deref()))
    }

    fn session(&self) -> Result<Session> {
        self.state
            .read()
            .map(|s| s.clone())
            .map_err(|e| Error::Unexpected(e.to_string()))
    }

    fn login(&self, role: Role) -> Result<()> {
        self.repository.set_token(role.as_str())?;
        info!("Logged in as {}", role);
        self.replace(Session {
            role,
            is_authenticated: true,
        })
    }

    fn logout(&self) -> Result<()> {
        self.repository.clear_token()?;
        info!("Logged out");
        self.replace(Session::default())
    }

    fn can_access(&self, action: Action) -> Result<bool> {
        Ok(self.session()?.role.can(action))
    }
}
