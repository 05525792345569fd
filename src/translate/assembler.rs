//! Argument assembler: fragments in, finished invocation out.

use crate::translate::transform::Fragment;
use crate::translate::Invocation;

/// Builder for the `systemd-run` argument sequence.
#[derive(Debug, Clone)]
pub struct RunAssembler {
    args: Vec<String>,
    command_override: Option<String>,
}

impl RunAssembler {
    /// Start with just the program name.
    pub fn new(program: &str) -> Self {
        Self {
            args: vec![program.to_string()],
            command_override: None,
        }
    }

    /// Append a directive's arguments. A later override replaces an earlier one.
    pub fn push(&mut self, fragment: Fragment) {
        self.args.extend(fragment.args);
        if let Some(command) = fragment.command_override {
            if let Some(previous) = self.command_override.replace(command) {
                tracing::debug!(%previous, "Replacing trailing command");
            }
        }
    }

    /// Append the trailing command (empty when none) and finish.
    pub fn build(self) -> Invocation {
        let mut args = self.args;
        args.push(self.command_override.unwrap_or_default());
        Invocation::from_args(args)
    }
}
