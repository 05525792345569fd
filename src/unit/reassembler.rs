//! Continuation folding: physical lines → logical directive lines.

const CONTINUATION: char = '\\';

/// Joins backslash-continued lines into logical lines.
///
/// The trailing backslash is removed and the next line is appended with
/// no separator, which is how systemd folds lines too.
#[derive(Debug, Default, Clone)]
pub struct LineReassembler {
    pending: String,
}

impl LineReassembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one physical line (without its newline).
    ///
    /// Returns the completed logical line, or `None` while a continuation
    /// is open or when the line carries nothing (blank or comment).
    pub fn push(&mut self, line: &str) -> Option<String> {
        let line = line.trim_end();
        if line.trim_start().is_empty() {
            return None;
        }

        if self.pending.is_empty() && is_comment(line) {
            tracing::trace!(line, "Skipping comment");
            return None;
        }

        if let Some(head) = line.strip_suffix(CONTINUATION) {
            self.pending.push_str(head);
            return None;
        }

        self.pending.push_str(line);
        Some(std::mem::take(&mut self.pending))
    }

    /// Drop any half-built line, returning it if there was one.
    pub fn discard(&mut self) -> Option<String> {
        if self.pending.is_empty() {
            None
        } else {
            Some(std::mem::take(&mut self.pending))
        }
    }
}

fn is_comment(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.starts_with('#') || trimmed.starts_with(';')
}
