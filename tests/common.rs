//! Shared test fixtures and utilities for git-uri tests.

#![allow(dead_code)]

use std::path::PathBuf;

use rstest::fixture;
use tempfile::TempDir;

/// The record every bare `org/repo` input parses to.
pub const DEFAULT_REPO: &str = "org/repo";
pub const DEFAULT_SUBDIR: &str = "/";
pub const DEFAULT_REF: &str = "main";

/// A scratch directory with a project-level config file.
pub struct ConfigDir {
    pub dir: TempDir,
    pub path: PathBuf,
}

impl ConfigDir {
    pub fn new(contents: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("git-uri.toml");
        std::fs::write(&path, contents).unwrap();
        Self { dir, path }
    }
}

/// Config that switches both defaults away from github/main.
#[fixture]
pub fn trunk_config() -> ConfigDir {
    ConfigDir::new("[defaults]\nref = \"trunk\"\nprovider = \"gitlab\"\n")
}
