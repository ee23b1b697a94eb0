//! Invitation-acceptor GitHub infrastructure adapter.
//!
//! Implements the [`invitations::InvitationApi`] port over the GitHub REST API
//! using [`reqwest`].
//!
//! ## Architectural Layer
//!
//! **Infrastructure.** This crate must not contain domain rules: it knows
//! nothing about whitelists. All GitHub API details (authentication headers,
//! `Link` pagination, status handling) are handled here; the [`invitations`]
//! and `driver` crates never see them.
//!
//! ## Endpoints
//!
//! | Operation | Request |
//! |-----------|---------|
//! | list pending invitations | `GET /user/repository_invitations` (paginated) |
//! | accept invitation | `PATCH /user/repository_invitations/{id}` |

mod client;
mod config;
mod error;
mod pagination;

pub use client::GithubClient;
pub use config::{Credential, GithubConfig, API_VERSION, DEFAULT_BASE_URL};
pub use error::GithubError;
pub use pagination::{Page, PageCursor, PageLinks};
