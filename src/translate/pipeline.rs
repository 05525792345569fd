//! Pipeline: ties section filtering, reassembly and transforms together.

use std::io::BufRead;

use crate::error::TranslateError;
use crate::identity::IdentityResolver;
use crate::translate::assembler::RunAssembler;
use crate::translate::registry::{is_excluded, DirectiveKind};
use crate::translate::transform::apply;
use crate::translate::{Invocation, RunOptions};
use crate::unit::{Directive, LineReassembler, SectionFilter, SectionLine};

/// Translate the `[Service]` section read from `reader`.
///
/// Reading stops at the first section header after `[Service]`. Lookup
/// failures from `User=`/`Group=` abort the translation.
pub fn translate<R: BufRead>(
    reader: R,
    options: &RunOptions,
    identities: &dyn IdentityResolver,
) -> Result<Invocation, TranslateError> {
    let mut section = SectionFilter::new();
    let mut reassembler = LineReassembler::new();
    let mut assembler = RunAssembler::new(&options.program);

    for line in reader.lines() {
        let line = line.map_err(TranslateError::Read)?;
        let line = line.trim_end();

        match section.observe(line) {
            SectionLine::Header => {
                tracing::debug!("Entered [Service] section");
                continue;
            }
            SectionLine::End => {
                tracing::debug!(header = line, "Left [Service] section");
                break;
            }
            SectionLine::Ignored => continue,
            SectionLine::Body => {}
        }

        let Some(logical) = reassembler.push(line) else {
            continue;
        };
        let directive = Directive::parse(logical);

        if is_excluded(directive.name(), &options.extra_excluded_prefixes) {
            tracing::debug!(directive = directive.name(), "Skipping excluded directive");
            continue;
        }

        let kind = DirectiveKind::of(directive.name());
        let fragment = apply(kind, &directive, &options.invoking_shell, identities)?;
        assembler.push(fragment);
    }

    if let Some(partial) = reassembler.discard() {
        tracing::debug!(%partial, "Dropping unterminated continuation line");
    }

    Ok(assembler.build())
}
