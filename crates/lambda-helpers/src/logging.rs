//! Level-labelled log lines written for the handler's log stream.

use std::io::Write;

/// Write `[<level>] <message>` as one line and flush.
pub fn write_log_line<W: Write + ?Sized>(
    out: &mut W,
    level: &str,
    message: &str,
) -> std::io::Result<()> {
    writeln!(out, "[{level}] {message}")?;
    out.flush()
}
