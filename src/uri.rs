//! Compact git references.
//!
//! Handles patterns like:
//! - "org/repo"
//! - "org/repo#v1.2.0"
//! - "org/repo/packages/core#dev"
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GitUriError;

/// Ref used when the input carries none.
pub const DEFAULT_REF: &str = "main";
/// Subdir used when the input carries none.
pub const ROOT_SUBDIR: &str = "/";

/// A parsed `owner/name[/subdir][#ref]` reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "GitUriFields")]
pub struct GitUri {
    repo: String,
    subdir: String,
    #[serde(rename = "ref")]
    reference: String,
}

impl GitUri {
    /// Parse with `main` as the fallback ref.
    pub fn parse(input: &str) -> Result<Self, GitUriError> {
        Self::parse_with(input, DEFAULT_REF)
    }

    /// Parse with a caller supplied fallback ref.
    ///
    /// Everything after the first `#` is the ref, an empty one counts as absent.
    /// The first two `/` segments before it are the repo, whatever follows
    /// them is the subdir.
    pub fn parse_with(input: &str, default_ref: &str) -> Result<Self, GitUriError> {
        let (path, reference) = match input.split_once('#') {
            Some((path, reference)) if !reference.is_empty() => (path, reference),
            Some((path, _)) => (path, default_ref),
            None => (input, default_ref),
        };

        let mut segments = path.splitn(3, '/');
        let owner = segments.next().filter(|s| !s.is_empty());
        let name = segments.next().filter(|s| !s.is_empty());
        let (Some(owner), Some(name)) = (owner, name) else {
            return Err(GitUriError::invalid_format(input));
        };

        let (repo, subdir) = path.split_at(owner.len() + 1 + name.len());
        let subdir = if subdir.is_empty() {
            ROOT_SUBDIR
        } else {
            subdir
        };

        let uri = Self {
            repo: repo.to_owned(),
            subdir: subdir.to_owned(),
            reference: reference.to_owned(),
        };
        tracing::debug!("Parsed {input} as {uri:?}");
        Ok(uri)
    }

    /// `owner/name`
    pub fn repo(&self) -> &str {
        &self.repo
    }

    pub fn subdir(&self) -> &str {
        &self.subdir
    }

    /// The branch, tag or commit.
    pub fn reference(&self) -> &str {
        &self.reference
    }

    pub fn owner(&self) -> &str {
        self.split_repo().0
    }

    pub fn name(&self) -> &str {
        self.split_repo().1
    }

    /// Whether the reference points below the repository root.
    pub fn has_subdir(&self) -> bool {
        self.subdir != ROOT_SUBDIR
    }

    fn split_repo(&self) -> (&str, &str) {
        // Parsing and deserializing both guarantee a separator.
        self.repo.split_once('/').unwrap_or((self.repo.as_str(), ""))
    }
}

/// Serialized shape of [`GitUri`], only accepted when it is what the parser
/// would produce for the same reference.
#[derive(Deserialize)]
struct GitUriFields {
    repo: String,
    subdir: String,
    #[serde(rename = "ref")]
    reference: String,
}

impl TryFrom<GitUriFields> for GitUri {
    type Error = GitUriError;

    fn try_from(fields: GitUriFields) -> Result<Self, Self::Error> {
        let compact = format!("{}{}#{}", fields.repo, fields.subdir, fields.reference);
        let uri = Self::parse(&compact)?;
        if uri.repo != fields.repo
            || uri.subdir != fields.subdir
            || uri.reference != fields.reference
        {
            return Err(GitUriError::invalid_format(&compact));
        }
        Ok(uri)
    }
}

/// Parse a compact git reference, see [`GitUri::parse`].
pub fn parse_git_uri(input: &str) -> Result<GitUri, GitUriError> {
    GitUri::parse(input)
}

impl FromStr for GitUri {
    type Err = GitUriError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Canonical compact form, the ref is always spelled out.
impl fmt::Display for GitUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.repo)?;
        if self.has_subdir() {
            write!(f, "{}", self.subdir)?;
        }
        write!(f, "#{}", self.reference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_only() {
        let uri = GitUri::parse("org/repo").unwrap();
        assert_eq!(uri.repo(), "org/repo");
        assert_eq!(uri.subdir(), "/");
        assert_eq!(uri.reference(), "main");
    }

    #[test]
    fn test_owner_and_name() {
        let uri = GitUri::parse("unjs/template/nested#v2").unwrap();
        assert_eq!(uri.owner(), "unjs");
        assert_eq!(uri.name(), "template");
        assert!(uri.has_subdir());
    }

    #[test]
    fn test_first_hash_splits_ref() {
        let uri = GitUri::parse("org/repo#feature#2").unwrap();
        assert_eq!(uri.reference(), "feature#2");
        assert_eq!(uri.subdir(), "/");
    }

    #[test]
    fn test_slash_inside_ref() {
        let uri = GitUri::parse("org/repo/docs#release/1.x").unwrap();
        assert_eq!(uri.subdir(), "/docs");
        assert_eq!(uri.reference(), "release/1.x");
    }

    #[test]
    fn test_empty_ref_falls_back() {
        let uri = GitUri::parse("org/repo#").unwrap();
        assert_eq!(uri.reference(), "main");
    }

    #[test]
    fn test_trailing_slash_is_kept() {
        assert_eq!(GitUri::parse("org/repo/").unwrap().subdir(), "/");
        assert_eq!(GitUri::parse("org/repo/foo/").unwrap().subdir(), "/foo/");
    }

    #[test]
    fn test_custom_default_ref() {
        let uri = GitUri::parse_with("org/repo", "trunk").unwrap();
        assert_eq!(uri.reference(), "trunk");
        let uri = GitUri::parse_with("org/repo#dev", "trunk").unwrap();
        assert_eq!(uri.reference(), "dev");
    }

    #[test]
    fn test_missing_name() {
        for input in ["", "org", "org/", "/repo", "#main", "org#main"] {
            assert_eq!(
                GitUri::parse(input),
                Err(GitUriError::InvalidFormat {
                    input: input.to_owned()
                }),
                "{input}"
            );
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(GitUri::parse("org/repo").unwrap().to_string(), "org/repo#main");
        assert_eq!(
            GitUri::parse("org/repo/a/b#v1").unwrap().to_string(),
            "org/repo/a/b#v1"
        );
    }

    #[test]
    fn test_serialize_field_names() {
        let uri = GitUri::parse("org/repo/foo#dev").unwrap();
        let json = serde_json::to_string(&uri).unwrap();
        assert_eq!(json, r#"{"repo":"org/repo","subdir":"/foo","ref":"dev"}"#);
        assert_eq!(serde_json::from_str::<GitUri>(&json).unwrap(), uri);
    }

    #[test]
    fn test_deserialize_rejects_unparsable_fields() {
        for json in [
            r#"{"repo":"solo","subdir":"x","ref":""}"#,
            r#"{"repo":"org/repo","subdir":"docs","ref":"main"}"#,
            r#"{"repo":"org/repo","subdir":"/","ref":""}"#,
            r#"{"repo":"org/repo/extra","subdir":"/","ref":"main"}"#,
        ] {
            assert!(serde_json::from_str::<GitUri>(json).is_err(), "{json}");
        }
    }
}
