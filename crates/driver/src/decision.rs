//! Per-invitation decisions recorded during a run.

use invitations::{Invitation, InvitationId, RepositoryFullName, UserLogin};

/// What the runner did with one invitation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// The repository was whitelisted and the invitation was accepted.
    Accepted {
        /// GitHub id of the invitation.
        id: InvitationId,
        /// `owner/name` of the invited repository.
        repository: RepositoryFullName,
        /// Login of the user who sent the invitation.
        inviter: UserLogin,
    },
    /// The repository was not whitelisted; nothing was sent.
    Ignored {
        /// GitHub id of the invitation.
        id: InvitationId,
        /// `owner/name` of the invited repository.
        repository: RepositoryFullName,
        /// Login of the user who sent the invitation.
        inviter: UserLogin,
    },
}

impl Decision {
    pub(crate) fn accepted(invitation: &Invitation) -> Self {
        Self::Accepted {
            id: invitation.id,
            repository: invitation.repository_full_name().clone(),
            inviter: invitation.inviter_login().clone(),
        }
    }

    pub(crate) fn ignored(invitation: &Invitation) -> Self {
        Self::Ignored {
            id: invitation.id,
            repository: invitation.repository_full_name().clone(),
            inviter: invitation.inviter_login().clone(),
        }
    }

    /// Invitation the decision applies to.
    pub fn id(&self) -> InvitationId {
        match self {
            Self::Accepted { id, .. } | Self::Ignored { id, .. } => *id,
        }
    }

    /// True when the invitation was accepted.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}

/// Decisions of one run, in processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOutcome {
    decisions: Vec<Decision>,
}

impl RunOutcome {
    /// Records `decision` after those already made.
    pub(crate) fn push(&mut self, decision: Decision) {
        self.decisions.push(decision);
    }

    /// Every decision, accepted and ignored, in processing order.
    pub fn decisions(&self) -> &[Decision] {
        &self.decisions
    }

    /// Ids of accepted invitations, in the order they were accepted.
    pub fn accepted_ids(&self) -> Vec<InvitationId> {
        self.decisions
            .iter()
            .filter(|d| d.is_accepted())
            .map(Decision::id)
            .collect()
    }
}
