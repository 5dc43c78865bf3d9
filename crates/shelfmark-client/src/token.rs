//! Read-only bearer token lookup.
//!
//! The token is issued and stored by the login flow, which lives outside
//! this crate. Here it is only looked up, right before a request that
//! wants it.

use std::fmt::Debug;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Somewhere a bearer token might be found.
pub trait TokenSource: Debug + Send + Sync {
    /// The current token, or `None` when the user is not logged in.
    fn token(&self) -> Option<String>;
}

/// A token kept in a plain file on disk.
///
/// Missing, unreadable and blank files all mean "no token".
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenSource for FileTokenStore {
    fn token(&self) -> Option<String> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => non_blank(&contents),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                log::warn!("Failed to read token file {}: {}", self.path.display(), e);
                None
            }
        }
    }
}

/// A token supplied up front, e.g. from a command-line flag.
#[derive(Debug, Clone, Default)]
pub struct StaticToken(Option<String>);

impl StaticToken {
    pub fn new(token: Option<String>) -> Self {
        Self(token)
    }
}

impl TokenSource for StaticToken {
    fn token(&self) -> Option<String> {
        self.0.as_deref().and_then(non_blank)
    }
}

fn non_blank(raw: &str) -> Option<String> {
    let token = raw.trim();
    (!token.is_empty()).then(|| token.to_string())
}
