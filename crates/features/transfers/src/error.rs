use std::borrow::Cow;

/// Transfer suggestions slice error type.
#[inv_derive::inv_error]
pub enum TransferError {
    /// A seed file could not be read.
    #[error("Seed I/O error{}: {source}", format_context(.context))]
    Seed { source: std::io::Error, context: Option<Cow<'static, str>> },

    /// Seed or export JSON is malformed.
    #[error("Transfer JSON error{}: {source}", format_context(.context))]
    Parse { source: serde_json::Error, context: Option<Cow<'static, str>> },

    /// Two records share an id.
    #[error("Duplicate transfer id{}: {message}", format_context(.context))]
    DuplicateId { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A status or priority filter value is not recognised.
    #[error("Invalid filter{}: {message}", format_context(.context))]
    InvalidFilter { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A seeded record breaks a field constraint (empty id, zero quantity, bad amount).
    #[error("Invalid transfer record{}: {message}", format_context(.context))]
    InvalidRecord { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal transfers error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
