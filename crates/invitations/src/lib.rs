//! Core domain for the invitation acceptor.
//!
//! This crate contains the invitation data model, the whitelist, the newtype
//! identifiers, and the port trait through which the driver reaches GitHub.
//! Infrastructure crates implement the trait defined here; they never add
//! domain rules.
//!
//! ## Architectural Layer
//!
//! **Domain + port definitions.** This crate has no I/O dependencies. It
//! defines *what* is needed; infrastructure crates define *how* to supply it.
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`identifiers`] | Newtype identifiers (`InvitationId`, `RepositoryFullName`, etc.) |
//! | [`types`] | `Invitation`, `PendingInvitations`, `Timestamp` |
//! | [`whitelist`] | `Whitelist` parsing and membership |
//! | [`errors`] | `WhitelistError` |
//! | [`ports`] | `InvitationApi` trait |

pub mod errors;
pub mod identifiers;
pub mod ports;
pub mod types;
pub mod whitelist;

// Re-export everything at the crate root for ergonomic usage by downstream crates.
pub use errors::WhitelistError;
pub use identifiers::{InvitationId, RepositoryFullName, RunId, UserLogin};
pub use ports::InvitationApi;
pub use types::{Invitation, InvitedRepository, Inviter, PendingInvitations, Timestamp};
pub use whitelist::Whitelist;
