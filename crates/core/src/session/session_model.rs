//! Session domain models.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Dashboard user role.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Analyst,
    Partner,
    Lp,
}

/// What a role may do with a deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Crud,
    Approve,
    Read,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Analyst, Role::Partner, Role::Lp];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Analyst => "analyst",
            Role::Partner => "partner",
            Role::Lp => "lp",
        }
    }

    /// Derives a role from a persisted token. Unknown or missing tokens fall
    /// back to analyst.
    pub fn from_token(token: Option<&str>) -> Role {
        match token {
            Some("partner") => Role::Partner,
            Some("lp") => Role::Lp,
            _ => Role::Analyst,
        }
    }

    /// Analysts edit deals, partners approve them, LPs only read.
    pub fn can(&self, action: Action) -> bool {
        match self {
            Role::Analyst => matches!(action, Action::Crud | Action::Read),
            Role::Partner => matches!(action, Action::Approve | Action::Read),
            Role::Lp => matches!(action, Action::Read),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or(ValidationError::InvalidRole)
    }
}

/// Snapshot of the session store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub role: Role,
    pub is_authenticated: bool,
}

impl Session {
    pub fn from_token(token: Option<&str>) -> Self {
        Self {
            role: Role::from_token(token),
            is_authenticated: token.is_some_and(|t| !t.is_empty()),
        }
    }
}
