use std::borrow::Cow;

/// Errors raised while configuring the notification center.
#[inv_derive::inv_error]
pub enum NotifyError {
    /// Channel and history bounds must be greater than zero.
    #[error("Invalid capacity{}: {message}", format_context(.context))]
    InvalidCapacity { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
