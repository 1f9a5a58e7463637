//! femtologfmt is a small and opinionated structured-logging crate.
//!
//! The only possible output format is [logfmt]: every record is a single
//! line of `key=value` fields. All string values are quoted, label keys are
//! emitted in sorted order, and timestamps are normalized to UTC and
//! rendered as RFC 3339 with second resolution.
//!
//! A [`FemtoLogger`] is bound to one output sink at construction and turns
//! each `(message, labels)` pair into exactly one write:
//!
//! ```
//! use femtologfmt::{FemtoLogger, labels};
//!
//! let mut logger = FemtoLogger::new(Vec::new());
//! logger.log("request served", Some(&labels! {
//!     "status" => 200u16,
//!     "path" => "/health",
//! }))?;
//! # Ok::<(), std::io::Error>(())
//! ```
//!
//! [logfmt]: https://brandur.org/logfmt

mod formatter;
mod logger;
mod macros;
mod value;

pub use formatter::{format, quote};
pub use logger::{Clock, FemtoLogger};
pub use value::{FemtoValue, Labels};
