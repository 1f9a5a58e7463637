//! Convenience macros for building label maps and formatted records.

/// Build a [`Labels`](crate::Labels) map from `key => value` pairs.
///
/// Values go through [`FemtoValue::from`](crate::FemtoValue), so primitive
/// literals, strings, timestamps and pre-built `FemtoValue`s all work:
///
/// ```
/// use femtologfmt::{FemtoValue, labels};
///
/// let labels = labels! {
///     "lorem" => "ipsum",
///     "int" => 1234i64,
///     "err" => FemtoValue::error(std::io::Error::other("boom")),
/// };
/// assert_eq!(labels.len(), 3);
/// ```
#[macro_export]
macro_rules! labels {
    () => {
        $crate::Labels::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut labels = $crate::Labels::new();
        $(
            labels.insert(
                ::std::string::String::from($key),
                $crate::FemtoValue::from($value),
            );
        )+
        labels
    }};
}

/// Encode a record whose message is rendered from a format template.
///
/// Equivalent to formatting the message first and passing it to
/// [`FemtoLogger::log`](crate::FemtoLogger::log):
///
/// ```
/// use femtologfmt::{FemtoLogger, logf};
///
/// let mut logger = FemtoLogger::new(Vec::new());
/// logf!(logger, None, "{} {}", "Hello", 2022)?;
/// # Ok::<(), std::io::Error>(())
/// ```
#[macro_export]
macro_rules! logf {
    ($logger:expr, $labels:expr, $($arg:tt)+) => {
        $logger.log_args(::core::format_args!($($arg)+), $labels)
    };
}
