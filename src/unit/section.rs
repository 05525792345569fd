//! `[Service]` section tracking.

/// Header of the only section the translator reads.
pub const SERVICE_SECTION: &str = "[Service]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Outside,
    Inside,
    Finished,
}

/// What the filter decided about one physical line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionLine {
    /// The `[Service]` header itself.
    Header,
    /// A line belonging to the service section.
    Body,
    /// Outside the section; ignore.
    Ignored,
    /// A later section started; stop reading.
    End,
}

/// Two-state filter with a terminal state once the section is left.
///
/// The section is assumed not to be split across several occurrences:
/// after the first header following `[Service]` nothing is read.
#[derive(Debug, Clone)]
pub struct SectionFilter {
    state: State,
}

impl SectionFilter {
    pub fn new() -> Self {
        Self {
            state: State::Outside,
        }
    }

    pub fn observe(&mut self, line: &str) -> SectionLine {
        match self.state {
            State::Finished => SectionLine::End,
            _ if line.starts_with(SERVICE_SECTION) => {
                self.state = State::Inside;
                SectionLine::Header
            }
            State::Inside if line.starts_with('[') => {
                self.state = State::Finished;
                SectionLine::End
            }
            State::Inside => SectionLine::Body,
            State::Outside => SectionLine::Ignored,
        }
    }

    pub fn is_inside(&self) -> bool {
        self.state == State::Inside
    }
}

impl Default for SectionFilter {
    fn default() -> Self {
        Self::new()
    }
}
