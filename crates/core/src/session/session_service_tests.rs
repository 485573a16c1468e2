use std::sync::Arc;

use tempfile::tempdir;

use crate::errors::{Error, Result};
use crate::events::{MockStoreEventSink, NoOpStoreEventSink, StoreEvent};
use crate::session::{
    Action, FileTokenStore, InMemoryTokenStore, Role, Session, SessionRepositoryTrait,
    SessionService, SessionServiceTrait,
};

fn memory_service(store: InMemoryTokenStore) -> SessionService {
    SessionService::new(Arc::new(store), Arc::new(NoOpStoreEventSink)).unwrap()
}

#[test]
fn starts_unauthenticated_without_token() {
    let service = memory_service(InMemoryTokenStore::new());
    let session = service.session().unwrap();
    assert_eq!(session.role, Role::Analyst);
    assert!(!session.is_authenticated);
}

#[test]
fn restores_role_from_persisted_token() {
    let service = memory_service(InMemoryTokenStore::with_token("lp"));
    assert_eq!(
        service.session().unwrap(),
        Session {
            role: Role::Lp,
            is_authenticated: true
        }
    );
    assert_eq!(service.get_role().unwrap(), Role::Lp);
}

#[test]
fn login_then_logout_round_trip() {
    let service = memory_service(InMemoryTokenStore::new());

    service.login(Role::Partner).unwrap();
    let session = service.session().unwrap();
    assert_eq!(session.role, Role::Partner);
    assert!(session.is_authenticated);
    assert_eq!(service.get_role().unwrap(), Role::Partner);

    service.logout().unwrap();
    let session = service.session().unwrap();
    assert_eq!(session.role, Role::Analyst);
    assert!(!session.is_authenticated);
}

#[test]
fn logout_is_idempotent() {
    let service = memory_service(InMemoryTokenStore::with_token("partner"));
    service.logout().unwrap();
    let first = service.session().unwrap();
    service.logout().unwrap();
    assert_eq!(service.session().unwrap(), first);
    assert_eq!(service.get_role().unwrap(), Role::Analyst);
}

#[test]
fn login_persists_before_process_restart() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("jwt");

    let service = SessionService::new(
        Arc::new(FileTokenStore::new(&path)),
        Arc::new(NoOpStoreEventSink),
    )
    .unwrap();
    service.login(Role::Lp).unwrap();
    drop(service);

    let reloaded = SessionService::new(
        Arc::new(FileTokenStore::new(&path)),
        Arc::new(NoOpStoreEventSink),
    )
    .unwrap();
    assert_eq!(reloaded.session().unwrap().role, Role::Lp);

    reloaded.logout().unwrap();
    assert!(!path.exists());
}

#[test]
fn can_access_uses_current_role() {
    let service = memory_service(InMemoryTokenStore::new());
    assert!(service.can_access(Action::Crud).unwrap());

    service.login(Role::Lp).unwrap();
    assert!(service.can_access(Action::Read).unwrap());
    assert!(!service.can_access(Action::Approve).unwrap());
}

#[test]
fn emits_session_changes() {
    let sink = MockStoreEventSink::new();
    let service =
        SessionService::new(Arc::new(InMemoryTokenStore::new()), Arc::new(sink.clone())).unwrap();

    service.login(Role::Partner).unwrap();
    service.logout().unwrap();

    assert_eq!(
        sink.events(),
        vec![
            StoreEvent::SessionChanged {
                role: Role::Partner,
                is_authenticated: true
            },
            StoreEvent::SessionChanged {
                role: Role::Analyst,
                is_authenticated: false
            },
        ]
    );
}

struct FailingTokenStore;

impl SessionRepositoryTrait for FailingTokenStore {
    fn get_token(&self) -> Result<Option<String>> {
        Ok(None)
    }

    fn set_token(&self, _token: &str) -> Result<()> {
        Err(Error::Repository("storage full".to_string()))
    }

    fn clear_token(&self) -> Result<()> {
        Ok(())
    }
}

#[test]
fn failed_persist_leaves_memory_untouched() {
    let service =
        SessionService::new(Arc::new(FailingTokenStore), Arc::new(NoOpStoreEventSink)).unwrap();

    assert!(service.login(Role::Partner).is_err());
    let session = service.session().unwrap();
    assert_eq!(session.role, Role::Analyst);
    assert!(!session.is_authenticated);
}
