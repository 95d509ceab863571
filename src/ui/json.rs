//! NDJSON output for `--json` mode.
//!
//! One JSON object per line on stdout, discriminated by an `event` field.
//! Typed events live in [`events`]; `emit` takes raw values for dynamic
//! payloads.

pub mod events {
    use serde::Serialize;

    /// Emitted when a command finishes successfully.
    #[derive(Debug, Serialize)]
    pub struct CompleteEvent<'a> {
        pub event: &'static str,
        pub command: &'a str,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub day: Option<&'a str>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub stub_created: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub count: Option<usize>,
    }

    impl<'a> CompleteEvent<'a> {
        pub fn new(command: &'a str) -> Self {
            Self {
                event: "complete",
                command,
                day: None,
                stub_created: None,
                count: None,
            }
        }

        pub fn day(mut self, day: &'a str) -> Self {
            self.day = Some(day);
            self
        }

        pub fn stub_created(mut self, created: bool) -> Self {
            self.stub_created = Some(created);
            self
        }

        pub fn count(mut self, count: usize) -> Self {
            self.count = Some(count);
            self
        }
    }
}

use serde::Serialize;
use std::io::{self, Write};

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut impl Write, event: &serde_json::Value) -> io::Result<()> {
    let line = serde_json::to_string(event).unwrap_or_else(|_| "{}".to_string());
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Convenience helper that writes a raw JSON value to stdout.
pub fn emit(event: serde_json::Value) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, &event)
}

/// Emit a typed event as NDJSON to stdout.
pub fn emit_event<T: Serialize>(event: &T) -> io::Result<()> {
    let json =
        serde_json::to_string(event).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    let mut out = io::stdout().lock();
    out.write_all(json.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}
