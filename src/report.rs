//! Printing of the response document and the call duration.

use crate::Result;
use serde_json::Value;
use std::io::Write;
use std::time::{Duration, Instant};

/// Writes the pretty-printed response followed by the elapsed time.
pub struct Reporter<W> {
    out: W,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Print `response` as indented JSON, a blank separator, then the time since `start`.
    pub fn report(&mut self, response: &Value, start: Instant) -> Result<()> {
        let rendered = serde_json::to_string_pretty(response)?;
        writeln!(self.out, "{rendered}")?;
        writeln!(self.out, "\n\n")?;
        writeln!(self.out, "time taken, ``{}``", format_elapsed(start.elapsed()))?;
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Render a duration as `H:MM:SS[.ffffff]`, with a leading day count past 24 hours.
pub fn format_elapsed(elapsed: Duration) -> String {
    let total_secs = elapsed.as_secs();
    let micros = elapsed.subsec_micros();

    let days = total_secs / 86_400;
    let hours = (total_secs % 86_400) / 3_600;
    let minutes = (total_secs % 3_600) / 60;
    let seconds = total_secs % 60;

    let mut out = String::new();
    if days > 0 {
        let unit = if days == 1 { "day" } else { "days" };
        out.push_str(&format!("{days} {unit}, "));
    }
    out.push_str(&format!("{hours}:{minutes:02}:{seconds:02}"));
    if micros > 0 {
        out.push_str(&format!(".{micros:06}"));
    }
    out
}
