//! Translation of a `[Service]` section into a `systemd-run` invocation.
//!
//! ```text
//! Unit text → Section filter → Reassemble → Exclude → Transform → Assemble → Invocation
//! ```
//!
//! Each stage is a small pure piece that can be unit-tested on its own;
//! [`translate`] wires them together.

mod assembler;
mod emitter;
mod pipeline;
mod registry;
mod transform;

pub use assembler::RunAssembler;
pub use emitter::render;
pub use pipeline::translate;
pub use registry::{directive_registry, is_excluded, DirectiveDef, DirectiveKind, EXCLUDED_PREFIXES};
pub use transform::{apply, Fragment};

/// Program named by the emitted command line unless configured otherwise.
pub const DEFAULT_PROGRAM: &str = "systemd-run";

/// Inputs of a translation that do not come from the unit text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    /// First element of the argument sequence.
    pub program: String,
    /// Shell of the invoking user, run when the target identity has none.
    pub invoking_shell: String,
    /// Prefixes excluded on top of [`EXCLUDED_PREFIXES`].
    pub extra_excluded_prefixes: Vec<String>,
}

impl RunOptions {
    pub fn new(invoking_shell: impl Into<String>) -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            invoking_shell: invoking_shell.into(),
            extra_excluded_prefixes: Vec::new(),
        }
    }

    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    pub fn with_excluded_prefixes(mut self, prefixes: Vec<String>) -> Self {
        self.extra_excluded_prefixes.extend(prefixes);
        self
    }
}

/// A finished argument sequence.
///
/// The last element is the trailing command: the invoking shell when a
/// transform asked for one, otherwise the empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    args: Vec<String>,
}

impl Invocation {
    pub(crate) fn from_args(args: Vec<String>) -> Self {
        debug_assert!(args.len() >= 2, "program and trailing command are always present");
        Self { args }
    }

    /// The complete sequence, trailing element included.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn program(&self) -> &str {
        &self.args[0]
    }

    /// The trailing command, if any transform set one.
    pub fn command_override(&self) -> Option<&str> {
        self.args
            .last()
            .map(String::as_str)
            .filter(|command| !command.is_empty())
    }

    pub fn into_args(self) -> Vec<String> {
        self.args
    }
}
