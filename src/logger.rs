//! The logfmt record encoder.
//!
//! A `FemtoLogger` owns one output sink and turns each `(message, labels)`
//! pair into a single text line:
//!
//! ```text
//! ts=<RFC3339-UTC> msg=<quoted-message>[ <key>=<value>]*\n
//! ```

use std::fmt;
use std::io::{self, Write};

use chrono::{DateTime, SecondsFormat, Utc};

use crate::formatter::{format, quote};
use crate::value::{FemtoValue, Labels};

/// Replaceable time source, consulted exactly once per encoded record.
///
/// Defaults to the real wall clock; substitute a fixed closure through
/// [`FemtoLogger::with_clock`] for deterministic output in tests.
pub type Clock = Box<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// Encoder bound to one output sink.
///
/// Each call to [`log`](Self::log) is a stateless transformation from its
/// inputs to one line, issued to the sink as one `write` call. The logger
/// performs no synchronization of its own: callers sharing one instance
/// must serialize calls (for example behind a `Mutex`) or rely on the sink
/// guaranteeing whole-write atomicity.
pub struct FemtoLogger<W> {
    writer: W,
    clock: Clock,
}

impl FemtoLogger<io::Stdout> {
    /// Create a logger writing to standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl FemtoLogger<io::Stderr> {
    /// Create a logger writing to standard error.
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write> FemtoLogger<W> {
    /// Create a logger over `writer`, timestamping records with the real
    /// wall clock.
    pub fn new(writer: W) -> Self {
        Self::with_clock(writer, Box::new(Utc::now))
    }

    /// Create a logger with an injected time source.
    pub fn with_clock(writer: W, clock: Clock) -> Self {
        Self { writer, clock }
    }

    /// Encode `msg` and `labels` as one line and write it to the sink.
    ///
    /// The timestamp is read from the clock at encode time. Label keys are
    /// emitted in ascending lexicographic order regardless of the map's
    /// iteration order, each value rendered through [`format`]. The line is
    /// handed to the sink in a single `write`; its byte count or error is
    /// returned unchanged, with no retry and no buffering across calls.
    ///
    /// Keys are emitted verbatim and unvalidated. Choosing a key equal to
    /// the reserved `ts`/`msg` fields, or one containing `=` or a space,
    /// produces a line downstream parsers may not accept.
    pub fn log(&mut self, msg: &str, labels: Option<&Labels>) -> io::Result<usize> {
        let ts = (self.clock)().to_rfc3339_opts(SecondsFormat::Secs, true);

        let mut line = String::with_capacity(64 + msg.len());
        line.push_str("ts=");
        line.push_str(&ts);
        line.push_str(" msg=");
        line.push_str(&quote(msg));

        if let Some(labels) = labels {
            let mut fields: Vec<(&String, &FemtoValue)> = labels.iter().collect();
            fields.sort_unstable_by_key(|(key, _)| key.as_str());

            for (key, value) in fields {
                line.push(' ');
                line.push_str(key);
                line.push('=');
                line.push_str(&format(value));
            }
        }
        line.push('\n');

        self.writer.write(line.as_bytes())
    }

    /// Render a positional format template, then encode it via
    /// [`log`](Self::log).
    ///
    /// Usually invoked through the [`logf!`](crate::logf) macro rather than
    /// by building `fmt::Arguments` by hand.
    pub fn log_args(
        &mut self,
        args: fmt::Arguments<'_>,
        labels: Option<&Labels>,
    ) -> io::Result<usize> {
        match args.as_str() {
            Some(msg) => self.log(msg, labels),
            None => self.log(&args.to_string(), labels),
        }
    }

    /// Consume the logger and hand back its sink.
    pub fn into_inner(self) -> W {
        self.writer
    }
}
