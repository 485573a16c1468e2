//! Session module - current role, authentication flag and the persisted
//! role token they are derived from.

mod session_model;
mod session_repository;
mod session_service;
mod session_traits;

#[cfg(test)]
mod session_service_tests;

pub use session_model::{Action, Role, Session};
pub use session_repository::{FileTokenStore, InMemoryTokenStore};
pub use session_service::SessionService;
pub use session_traits::{SessionRepositoryTrait, SessionServiceTrait};
