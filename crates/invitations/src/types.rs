//! Shared value types for the invitation domain.
//!
//! The shapes mirror the subset of the GitHub "repository invitation" object
//! this system reads. Everything is read-only: invitations are created and
//! removed by GitHub, never by us.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{InvitationId, RepositoryFullName, UserLogin};

// ---------------------------------------------------------------------------
// Invitation
// ---------------------------------------------------------------------------

/// A pending offer for the authenticated account to collaborate on a repository.
///
/// Only `id`, `repository.full_name` and `inviter.login` drive decisions. The
/// optional fields are carried for diagnostics and default to `None` when the
/// server omits them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invitation {
    /// GitHub-assigned invitation identifier.
    pub id: InvitationId,

    /// Repository the invitation grants access to.
    pub repository: InvitedRepository,

    /// Account that sent the invitation.
    pub inviter: Inviter,

    /// Permission level offered (e.g. `"write"`, `"admin"`).
    #[serde(default)]
    pub permissions: Option<String>,

    /// When the invitation was created.
    #[serde(default)]
    pub created_at: Option<Timestamp>,

    /// Web URL of the invitation.
    #[serde(default)]
    pub html_url: Option<String>,

    /// Whether GitHub considers the invitation expired.
    #[serde(default)]
    pub expired: Option<bool>,
}

impl Invitation {
    /// Creates an invitation carrying only the fields decisions depend on.
    pub fn new(id: InvitationId, full_name: RepositoryFullName, inviter: UserLogin) -> Self {
        Self {
            id,
            repository: InvitedRepository { full_name },
            inviter: Inviter { login: inviter },
            permissions: None,
            created_at: None,
            html_url: None,
            expired: None,
        }
    }

    /// Returns the `"owner/name"` of the invited repository.
    pub fn repository_full_name(&self) -> &RepositoryFullName {
        &self.repository.full_name
    }

    /// Returns the login of the account that sent the invitation.
    pub fn inviter_login(&self) -> &UserLogin {
        &self.inviter.login
    }
}

/// The repository half of an [`Invitation`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvitedRepository {
    /// `"owner/name"` of the repository.
    pub full_name: RepositoryFullName,
}

/// The inviter half of an [`Invitation`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inviter {
    /// Login of the inviting account.
    pub login: UserLogin,
}

// ---------------------------------------------------------------------------
// List result
// ---------------------------------------------------------------------------

/// Result of listing pending invitations.
///
/// The list endpoint is expected to return a JSON array. When it returns
/// anything else the payload is handed back untouched in
/// [`PendingInvitations::Unexpected`]; callers decide what to do with it.
#[derive(Debug, Clone, PartialEq)]
pub enum PendingInvitations {
    /// Every invitation across all pages, in server order.
    Invitations(Vec<Invitation>),

    /// A non-array payload returned by the first page, passed through as-is.
    Unexpected(serde_json::Value),
}

impl PendingInvitations {
    /// Returns the invitations, or `None` for an unexpected payload.
    pub fn as_slice(&self) -> Option<&[Invitation]> {
        match self {
            Self::Invitations(list) => Some(list.as_slice()),
            Self::Unexpected(_) => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Time
// ---------------------------------------------------------------------------

/// A UTC wall-clock timestamp.
///
/// Wraps [`chrono::DateTime<Utc>`] so callers never depend on `chrono` types
/// directly. Deserialises from RFC 3339 strings with any offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}
