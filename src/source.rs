//! References with an optional `provider:` prefix, e.g. `gh:org/repo#dev`.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::Defaults;
use crate::error::GitUriError;
use crate::provider::Provider;
use crate::uri::GitUri;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Source {
    pub provider: Provider,
    #[serde(flatten)]
    pub uri: GitUri,
}

impl Source {
    pub fn parse(input: &str) -> Result<Self, GitUriError> {
        Self::parse_with(input, &Defaults::default())
    }

    /// Parse, falling back to `defaults` for the provider and ref.
    pub fn parse_with(input: &str, defaults: &Defaults) -> Result<Self, GitUriError> {
        let (provider, rest) = match split_provider(input) {
            Some((name, rest)) => (name.parse::<Provider>()?, rest),
            None => (defaults.provider, input),
        };
        let uri = GitUri::parse_with(rest, &defaults.reference)
            .map_err(|_| GitUriError::invalid_format(input))?;
        Ok(Self { provider, uri })
    }

    pub fn web_url(&self) -> String {
        self.provider.web_url(&self.uri)
    }

    pub fn tarball_url(&self) -> String {
        self.provider.tarball_url(&self.uri)
    }
}

/// Split off a leading `name:` made of `[A-Za-z0-9._-]`.
fn split_provider(input: &str) -> Option<(&str, &str)> {
    input.split_once(':').filter(|(name, _)| {
        !name.is_empty()
            && name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
    })
}

impl FromStr for Source {
    type Err = GitUriError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.provider, self.uri)
    }
}
