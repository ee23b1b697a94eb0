//! Port trait for the remote invitation service.
//!
//! The driver only ever talks to GitHub through [`InvitationApi`]. The
//! `github` crate supplies the HTTP implementation; tests supply in-memory
//! fakes.

use async_trait::async_trait;

use crate::{InvitationId, PendingInvitations};

/// The two operations a batch run needs from the remote service.
///
/// Implementations must authenticate every request and must fail on any
/// non-success response. They must not retry.
#[async_trait]
pub trait InvitationApi: Send + Sync {
    /// Error produced by this implementation.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Lists every pending invitation for the authenticated account.
    ///
    /// Paginated results are concatenated in server order. A first page that
    /// is not a list is returned as [`PendingInvitations::Unexpected`].
    async fn list_pending_invitations(&self) -> Result<PendingInvitations, Self::Error>;

    /// Accepts the invitation identified by `id`.
    async fn accept_invitation(&self, id: InvitationId) -> Result<(), Self::Error>;
}
