//! Decision driver for the invitation acceptor.
//!
//! [`BatchRunner`] performs one linear pass: fetch every pending invitation,
//! then for each one, in server order, accept it if its repository is
//! whitelisted and ignore it otherwise. Every decision is logged at INFO.
//!
//! ## Architectural Layer
//!
//! **Orchestration layer.** The runner sequences calls between the domain
//! types in [`invitations`] and an [`invitations::InvitationApi`]
//! implementation. It never sees HTTP.
//!
//! The first failure ends the run. Invitations after the failing one are not
//! looked at, and nothing is retried.

mod decision;
mod error;

pub use decision::{Decision, RunOutcome};
pub use error::DriverError;

use invitations::{InvitationApi, PendingInvitations, Whitelist};
use tracing::{debug, info, instrument};

/// Drives one batch run against an [`InvitationApi`].
pub struct BatchRunner<'a, A: ?Sized> {
    api: &'a A,
    whitelist: &'a Whitelist,
}

impl<'a, A> BatchRunner<'a, A>
where
    A: InvitationApi + ?Sized,
{
    /// Creates a runner over `api` that accepts only repositories in `whitelist`.
    pub fn new(api: &'a A, whitelist: &'a Whitelist) -> Self {
        Self { api, whitelist }
    }

    /// Runs the fetch / decide / act loop once.
    ///
    /// Returns every decision taken, in processing order.
    #[instrument(skip_all, fields(whitelist_entries = self.whitelist.len()))]
    pub async fn run(&self) -> Result<RunOutcome, DriverError<A::Error>> {
        let pending = self
            .api
            .list_pending_invitations()
            .await
            .map_err(DriverError::List)?;

        let invitations = match pending {
            PendingInvitations::Invitations(list) => list,
            PendingInvitations::Unexpected(payload) => {
                return Err(DriverError::UnexpectedPayload { payload });
            }
        };
        debug!(count = invitations.len(), "Fetched pending invitations");

        let mut outcome = RunOutcome::default();
        for invitation in invitations {
            let id = invitation.id;
            let repo = invitation.repository_full_name();
            let inviter = invitation.inviter_login();

            debug!(
                invitation_id = %id,
                permissions = invitation.permissions.as_deref().unwrap_or("unknown"),
                created_at = ?invitation.created_at,
                expired = ?invitation.expired,
                html_url = invitation.html_url.as_deref().unwrap_or(""),
                "Evaluating invitation"
            );

            if self.whitelist.contains(repo) {
                info!("Accepting {} {} {}", repo, inviter, id);
                self.api
                    .accept_invitation(id)
                    .await
                    .map_err(|source| DriverError::Accept {
                        id,
                        repository: repo.clone(),
                        source,
                    })?;
                outcome.push(Decision::accepted(&invitation));
            } else {
                info!("Ignoring {} {} {}", repo, inviter, id);
                outcome.push(Decision::ignored(&invitation));
            }
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests;
