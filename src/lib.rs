//! Parse compact git references of the form `owner/name[/subdir][#ref]`.
//!
//! ```
//! let uri = git_uri::parse_git_uri("org/repo/foo/bar#dev").unwrap();
//! assert_eq!(uri.repo(), "org/repo");
//! assert_eq!(uri.subdir(), "/foo/bar");
//! assert_eq!(uri.reference(), "dev");
//! ```
pub mod config;
pub mod error;
pub mod provider;
pub mod source;
pub mod uri;

#[cfg(feature = "application")]
pub mod app;
#[cfg(feature = "application")]
pub mod cli;

pub use error::GitUriError;
pub use provider::Provider;
pub use source::Source;
pub use uri::{GitUri, parse_git_uri};
