use inv_derive::inv_error;
use std::borrow::Cow;

#[inv_error]
pub enum SeedError {
    #[error("Seed I/O error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read(path: &str) -> Result<String> {
    std::fs::read_to_string(path).context("Reading seed")
}

fn main() {
    let _ = read("missing.json");
}
