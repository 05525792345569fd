//! Account and group resolution.
//!
//! `User=` and `Group=` name identities, but `systemd-run` only accepts
//! numeric ids. The [`IdentityResolver`] trait is the seam between the
//! translator and the system databases so that translation can be tested
//! against a fixed table.

mod system;

use thiserror::Error;

pub use system::SystemIdentities;

/// Errors produced while resolving an identity name.
#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("user '{name}' not found in the account database")]
    AccountNotFound { name: String },

    #[error("group '{name}' not found in the group database")]
    GroupNotFound { name: String },

    #[error("identity name '{name}' contains a NUL byte")]
    InvalidName { name: String },

    #[error("failed to look up '{name}': {source}")]
    Lookup {
        name: String,
        #[source]
        source: std::io::Error,
    },
}

/// A resolved entry from the account database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub name: String,
    pub uid: u32,
    pub gid: u32,
    /// Configured login shell (may be empty).
    pub shell: String,
}

impl Account {
    /// Whether the login shell refuses interactive sessions.
    pub fn has_nologin_shell(&self) -> bool {
        self.shell.ends_with("nologin")
    }
}

/// A resolved entry from the group database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub name: String,
    pub gid: u32,
}

/// Resolves identity names to account and group entries.
pub trait IdentityResolver {
    fn account(&self, name: &str) -> Result<Account, IdentityError>;
    fn group(&self, name: &str) -> Result<Group, IdentityError>;
}
