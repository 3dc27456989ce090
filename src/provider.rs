use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GitUriError;
use crate::uri::GitUri;

/// Git hosting services a reference can resolve against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    #[default]
    #[serde(alias = "gh")]
    GitHub,
    #[serde(alias = "gl")]
    GitLab,
    #[serde(alias = "bb")]
    Bitbucket,
    #[serde(alias = "srht")]
    Sourcehut,
}

impl Provider {
    pub const ALL: [Provider; 4] = [
        Provider::GitHub,
        Provider::GitLab,
        Provider::Bitbucket,
        Provider::Sourcehut,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Provider::GitHub => "github",
            Provider::GitLab => "gitlab",
            Provider::Bitbucket => "bitbucket",
            Provider::Sourcehut => "sourcehut",
        }
    }

    fn alias(&self) -> &'static str {
        match self {
            Provider::GitHub => "gh",
            Provider::GitLab => "gl",
            Provider::Bitbucket => "bb",
            Provider::Sourcehut => "srht",
        }
    }

    fn base_url(&self, uri: &GitUri) -> String {
        match self {
            Provider::GitHub => format!("https://github.com/{}", uri.repo()),
            Provider::GitLab => format!("https://gitlab.com/{}", uri.repo()),
            Provider::Bitbucket => format!("https://bitbucket.org/{}", uri.repo()),
            Provider::Sourcehut => format!("https://git.sr.ht/~{}", uri.repo()),
        }
    }

    /// Browsable location of the ref and subdir.
    pub fn web_url(&self, uri: &GitUri) -> String {
        let base = self.base_url(uri);
        let reference = uri.reference();
        let subdir = if uri.has_subdir() { uri.subdir() } else { "" };
        match self {
            Provider::GitHub => format!("{base}/tree/{reference}{subdir}"),
            Provider::GitLab => format!("{base}/-/tree/{reference}{subdir}"),
            Provider::Bitbucket => format!("{base}/src/{reference}{subdir}"),
            Provider::Sourcehut if subdir.is_empty() => format!("{base}/tree/{reference}"),
            Provider::Sourcehut => format!("{base}/tree/{reference}/item{subdir}"),
        }
    }

    /// Archive of the whole repository at the ref.
    ///
    /// Providers only serve full-repository archives, the subdir is left to
    /// the consumer.
    pub fn tarball_url(&self, uri: &GitUri) -> String {
        let base = self.base_url(uri);
        let reference = uri.reference();
        match self {
            Provider::GitHub => format!("{base}/archive/{reference}.tar.gz"),
            Provider::GitLab => format!("{base}/-/archive/{reference}.tar.gz"),
            Provider::Bitbucket => format!("{base}/get/{reference}.tar.gz"),
            Provider::Sourcehut => format!("{base}/archive/{reference}.tar.gz"),
        }
    }
}

impl FromStr for Provider {
    type Err = GitUriError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        Provider::ALL
            .into_iter()
            .find(|p| p.name() == lower || p.alias() == lower)
            .ok_or_else(|| GitUriError::UnknownProvider {
                provider: s.to_owned(),
            })
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aliases() {
        assert_eq!("gh".parse::<Provider>().unwrap(), Provider::GitHub);
        assert_eq!("GitLab".parse::<Provider>().unwrap(), Provider::GitLab);
        assert_eq!("bb".parse::<Provider>().unwrap(), Provider::Bitbucket);
        assert_eq!("srht".parse::<Provider>().unwrap(), Provider::Sourcehut);
    }

    #[test]
    fn test_unknown() {
        assert_eq!(
            "codeberg".parse::<Provider>(),
            Err(GitUriError::UnknownProvider {
                provider: "codeberg".into()
            })
        );
    }

    #[test]
    fn test_web_url_root() {
        let uri = GitUri::parse("org/repo").unwrap();
        assert_eq!(
            Provider::GitHub.web_url(&uri),
            "https://github.com/org/repo/tree/main"
        );
        assert_eq!(
            Provider::Sourcehut.web_url(&uri),
            "https://git.sr.ht/~org/repo/tree/main"
        );
    }

    #[test]
    fn test_web_url_subdir() {
        let uri = GitUri::parse("org/repo/foo/bar#dev").unwrap();
        assert_eq!(
            Provider::GitLab.web_url(&uri),
            "https://gitlab.com/org/repo/-/tree/dev/foo/bar"
        );
        assert_eq!(
            Provider::Bitbucket.web_url(&uri),
            "https://bitbucket.org/org/repo/src/dev/foo/bar"
        );
        assert_eq!(
            Provider::Sourcehut.web_url(&uri),
            "https://git.sr.ht/~org/repo/tree/dev/item/foo/bar"
        );
    }

    #[test]
    fn test_tarball_url_ignores_subdir() {
        let uri = GitUri::parse("org/repo/foo#v1.0.0").unwrap();
        assert_eq!(
            Provider::GitHub.tarball_url(&uri),
            "https://github.com/org/repo/archive/v1.0.0.tar.gz"
        );
        assert_eq!(
            Provider::Bitbucket.tarball_url(&uri),
            "https://bitbucket.org/org/repo/get/v1.0.0.tar.gz"
        );
    }

    #[test]
    fn test_deserialize_alias() {
        #[derive(Deserialize)]
        struct Wrapper {
            provider: Provider,
        }
        let w: Wrapper = toml::from_str(r#"provider = "gl""#).unwrap();
        assert_eq!(w.provider, Provider::GitLab);
    }
}
