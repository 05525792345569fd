//! Per-directive transforms: directive → argument fragment.

use crate::identity::{IdentityError, IdentityResolver};
use crate::translate::registry::DirectiveKind;
use crate::unit::Directive;

pub const PROPERTY_FLAG: &str = "-p";
pub const UID_FLAG: &str = "--uid";
pub const GID_FLAG: &str = "--gid";
pub const SHELL_FLAG: &str = "--shell";
/// Attach a pseudo-terminal, wait for exit, and garbage-collect the unit.
pub const INTERACTIVE_FLAGS: [&str; 3] = ["--pty", "--wait", "--collect"];
pub const DYNAMIC_USER_PROPERTY: &str = "DynamicUser=true";

/// Arguments contributed by one directive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment {
    pub args: Vec<String>,
    /// Command to run after all options, when the directive requires one.
    pub command_override: Option<String>,
}

impl Fragment {
    fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
            command_override: None,
        }
    }

    fn with_override(mut self, command: &str) -> Self {
        self.command_override = Some(command.to_string());
        self
    }
}

/// Apply the transform registered for `kind`.
///
/// `shell` is the invoking user's shell; it becomes the trailing command
/// whenever the target identity cannot provide an interactive shell.
pub fn apply(
    kind: DirectiveKind,
    directive: &Directive,
    shell: &str,
    identities: &dyn IdentityResolver,
) -> Result<Fragment, IdentityError> {
    match kind {
        DirectiveKind::User => user(directive.value(), shell, identities),
        DirectiveKind::Group => group(directive.value(), identities),
        DirectiveKind::DynamicUser => Ok(dynamic_user(shell)),
        DirectiveKind::Generic => Ok(generic(directive)),
    }
}

/// `systemd-run` only takes numeric uids. Accounts with a nologin shell
/// would exit immediately under `--shell`, so run the invoking shell in a
/// pty instead.
fn user(
    name: &str,
    shell: &str,
    identities: &dyn IdentityResolver,
) -> Result<Fragment, IdentityError> {
    let account = identities.account(name)?;
    let mut args = vec![UID_FLAG.to_string(), account.uid.to_string()];

    if account.has_nologin_shell() {
        tracing::info!(user = name, shell, "Account has a nologin shell, running invoking shell");
        args.extend(INTERACTIVE_FLAGS.iter().map(|f| f.to_string()));
        Ok(Fragment::from_args(args).with_override(shell))
    } else {
        args.push(SHELL_FLAG.to_string());
        Ok(Fragment::from_args(args))
    }
}

fn group(name: &str, identities: &dyn IdentityResolver) -> Result<Fragment, IdentityError> {
    let group = identities.group(name)?;
    Ok(Fragment::from_args([GID_FLAG.to_string(), group.gid.to_string()]))
}

/// Dynamic users get a nologin shell, so the value is irrelevant: always
/// request the property and run the invoking shell.
fn dynamic_user(shell: &str) -> Fragment {
    tracing::info!(shell, "Dynamic user requested, running invoking shell");
    Fragment::from_args(
        [PROPERTY_FLAG, DYNAMIC_USER_PROPERTY]
            .into_iter()
            .chain(INTERACTIVE_FLAGS),
    )
    .with_override(shell)
}

fn generic(directive: &Directive) -> Fragment {
    Fragment::from_args([PROPERTY_FLAG, directive.as_str()])
}
