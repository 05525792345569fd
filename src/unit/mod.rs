//! Line-level reading of unit files.
//!
//! Only what the translator needs: locating the `[Service]` section,
//! folding continuation lines and splitting `Name=Value` directives.

mod directive;
mod reassembler;
mod section;

pub use directive::Directive;
pub use reassembler::LineReassembler;
pub use section::{SectionFilter, SectionLine, SERVICE_SECTION};
