use std::borrow::Cow;

/// Reasons a `[logging]` section cannot become the global subscriber.
#[inv_derive::inv_error]
pub enum LoggerError {
    /// `level` is not one of `off`, `error`, `warn`, `info`, `debug`, `trace`.
    #[error("Unknown log level `{level}`{}", format_context(context))]
    Level { level: String, context: Option<Cow<'static, str>> },

    #[error("Bad filter directive{}: {source}", format_context(context))]
    Filter { source: tracing_subscriber::filter::ParseError, context: Option<Cow<'static, str>> },

    /// Console output is off and no directory is set.
    #[error("Logger `{name}` has no output; enable `console` or set `directory`")]
    NoOutput { name: String },

    #[error("Log directory unavailable{}: {source}", format_context(context))]
    Directory { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Log file could not be opened{}: {source}", format_context(context))]
    File { source: tracing_appender::rolling::InitError, context: Option<Cow<'static, str>> },

    /// Another global subscriber owns the process.
    #[error("A global subscriber is already installed{}: {source}", format_context(context))]
    AlreadyInstalled {
        source: tracing_subscriber::util::TryInitError,
        context: Option<Cow<'static, str>>,
    },
}
