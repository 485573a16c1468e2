use crate::errors::Result;
use crate::session::session_model::{Action, Role, Session};

/// Storage for the persisted role token.
pub trait SessionRepositoryTrait: Send + Sync {
    fn get_token(&self) -> Result<Option<String>>;
    fn set_token(&self, token: &str) -> Result<()>;
    fn clear_token(&self) -> Result<()>;
}

/// Trait for session store operations
pub trait SessionServiceTrait: Send + Sync {
    /// Role derived from the persisted token.
    fn get_role(&self) -> Result<Role>;
    fn session(&self) -> Result<Session>;
    fn login(&self, role: Role) -> Result<()>;
    fn logout(&self) -> Result<()>;
    fn can_access(&self, action: Action) -> Result<bool>;
}
