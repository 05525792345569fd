//! Shared test utilities.

#![allow(dead_code)]

use std::collections::HashMap;
use std::io::Cursor;

use service2run::identity::{Account, Group, IdentityError, IdentityResolver};
use service2run::{translate, Invocation, RunOptions, TranslateError};

pub const INVOKING_SHELL: &str = "/usr/bin/fish";

/// In-memory account and group database.
#[derive(Debug, Default)]
pub struct FakeIdentities {
    accounts: HashMap<String, Account>,
    groups: HashMap<String, Group>,
}

impl FakeIdentities {
    /// `nobody` (nologin), `alice` (bash) and groups `nogroup`, `wheel`.
    pub fn standard() -> Self {
        Self::default()
            .with_account("nobody", 65534, "/usr/sbin/nologin")
            .with_account("alice", 1000, "/bin/bash")
            .with_group("nogroup", 65534)
            .with_group("wheel", 10)
    }

    pub fn with_account(mut self, name: &str, uid: u32, shell: &str) -> Self {
        self.accounts.insert(
            name.to_string(),
            Account {
                name: name.to_string(),
                uid,
                gid: uid,
                shell: shell.to_string(),
            },
        );
        self
    }

    pub fn with_group(mut self, name: &str, gid: u32) -> Self {
        self.groups.insert(
            name.to_string(),
            Group {
                name: name.to_string(),
                gid,
            },
        );
        self
    }
}

impl IdentityResolver for FakeIdentities {
    fn account(&self, name: &str) -> Result<Account, IdentityError> {
        self.accounts
            .get(name)
            .cloned()
            .ok_or_else(|| IdentityError::AccountNotFound {
                name: name.to_string(),
            })
    }

    fn group(&self, name: &str) -> Result<Group, IdentityError> {
        self.groups
            .get(name)
            .cloned()
            .ok_or_else(|| IdentityError::GroupNotFound {
                name: name.to_string(),
            })
    }
}

pub fn options() -> RunOptions {
    RunOptions::new(INVOKING_SHELL)
}

/// Translate `unit` with the standard fake database.
pub fn translate_str(unit: &str) -> Result<Invocation, TranslateError> {
    translate_with(unit, &options())
}

pub fn translate_with(unit: &str, options: &RunOptions) -> Result<Invocation, TranslateError> {
    translate(Cursor::new(unit), options, &FakeIdentities::standard())
}

/// Translate and return the argument sequence as owned strings.
pub fn args_of(unit: &str) -> Vec<String> {
    translate_str(unit).expect("translation failed").into_args()
}
