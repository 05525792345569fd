use crate::error::TranslateError;
use crate::translate::Invocation;

/// Render an invocation as a single POSIX-shell command line.
///
/// An empty trailing command means "none" and is left out rather than
/// rendered as `''`.
pub fn render(invocation: &Invocation) -> Result<String, TranslateError> {
    let args = invocation.args();
    let shown = match args.split_last() {
        Some((last, rest)) if last.is_empty() => rest,
        _ => args,
    };

    let quoted = shown
        .iter()
        .map(|arg| {
            shlex::try_quote(arg).map_err(|_| TranslateError::Unquotable { arg: arg.clone() })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(quoted.join(" "))
}
