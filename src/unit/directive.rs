/// One logical `Name=Value` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    line: String,
    split: Option<usize>,
}

impl Directive {
    pub fn parse(line: impl Into<String>) -> Self {
        let line = line.into();
        let split = line.find('=');
        Self { line, split }
    }

    /// Text before the first `=` (the whole line when there is none).
    pub fn name(&self) -> &str {
        match self.split {
            Some(pos) => &self.line[..pos],
            None => &self.line,
        }
    }

    /// Text after the first `=`; empty when there is none.
    pub fn value(&self) -> &str {
        match self.split {
            Some(pos) => &self.line[pos + 1..],
            None => "",
        }
    }

    /// The untouched logical line.
    pub fn as_str(&self) -> &str {
        &self.line
    }
}
