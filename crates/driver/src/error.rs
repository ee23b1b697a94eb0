//! Errors that abort a batch run.

use invitations::{InvitationId, RepositoryFullName};
use thiserror::Error;

/// Reasons a run stopped early.
///
/// `E` is the error type of the [`invitations::InvitationApi`] in use.
#[derive(Debug, Error)]
pub enum DriverError<E>
where
    E: std::error::Error + 'static,
{
    /// Listing pending invitations failed.
    #[error("failed to list pending invitations")]
    List(#[source] E),

    /// The list endpoint answered with something other than a list.
    #[error("pending invitations payload is not a list: {payload}")]
    UnexpectedPayload {
        /// The payload exactly as the server sent it.
        payload: serde_json::Value,
    },

    /// Accepting a whitelisted invitation failed.
    #[error("failed to accept invitation {id} for {repository}")]
    Accept {
        id: InvitationId,
        repository: RepositoryFullName,
        #[source]
        source: E,
    },
}
