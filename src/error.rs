use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GitUriError {
    /// The input carries no `<owner>/<name>` pair.
    #[error("Invalid git uri '{input}': expected `<owner>/<name>[/subdir][#ref]`")]
    InvalidFormat { input: String },
    /// The `provider:` prefix names no known provider.
    #[error("Unknown provider '{provider}'")]
    UnknownProvider { provider: String },
}

impl GitUriError {
    pub(crate) fn invalid_format(input: &str) -> Self {
        Self::InvalidFormat {
            input: input.to_owned(),
        }
    }
}
