//! Directive registry: single source of truth for special directives.

/// Directive name prefixes dropped outright.
///
/// They describe start and restart policy, which has no meaning for a
/// one-shot transient run.
pub const EXCLUDED_PREFIXES: &[&str] = &["Exec", "Restart"];

/// How a directive is turned into `systemd-run` arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectiveKind {
    /// `User=`: account name → `--uid`, plus shell handling.
    User,
    /// `Group=`: group name → `--gid`.
    Group,
    /// `DynamicUser=`: dynamic user property plus an explicit shell.
    DynamicUser,
    /// Anything else: forwarded as `-p Name=Value`.
    Generic,
}

/// A registered directive.
#[derive(Debug, Clone, Copy)]
pub struct DirectiveDef {
    pub name: &'static str,
    pub kind: DirectiveKind,
    pub description: &'static str,
}

// WorkingDirectory= needs no entry, it works as a plain property.
const REGISTRY: &[DirectiveDef] = &[
    DirectiveDef {
        name: "User",
        kind: DirectiveKind::User,
        description: "Run as this account, resolved to a numeric uid",
    },
    DirectiveDef {
        name: "Group",
        kind: DirectiveKind::Group,
        description: "Run with this group, resolved to a numeric gid",
    },
    DirectiveDef {
        name: "DynamicUser",
        kind: DirectiveKind::DynamicUser,
        description: "Allocate a transient user; runs the invoking shell",
    },
];

/// All directives with special handling.
pub fn directive_registry() -> &'static [DirectiveDef] {
    REGISTRY
}

impl DirectiveKind {
    /// Classify a directive name (exact, case-sensitive).
    pub fn of(name: &str) -> Self {
        REGISTRY
            .iter()
            .find(|def| def.name == name)
            .map(|def| def.kind)
            .unwrap_or(DirectiveKind::Generic)
    }
}

/// Whether a directive name starts with a built-in or extra excluded prefix.
pub fn is_excluded(name: &str, extra_prefixes: &[String]) -> bool {
    EXCLUDED_PREFIXES.iter().any(|p| name.starts_with(p))
        || extra_prefixes
            .iter()
            .any(|p| !p.is_empty() && name.starts_with(p.as_str()))
}
