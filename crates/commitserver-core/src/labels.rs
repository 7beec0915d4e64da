//! Label values for the commit server instruments.
//!
//! These are the values the commit server itself reports. Metric update calls
//! take `impl AsRef<str>`, so callers may still pass any string; nothing here
//! validates against the known set.

use std::fmt;

/// Kind of git operation performed against a repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GitRequestType {
    LsRemote,
    Fetch,
    Push,
}

impl GitRequestType {
    /// Label value used in `request_type`.
    pub fn as_str(self) -> &'static str {
        match self {
            GitRequestType::LsRemote => "ls-remote",
            GitRequestType::Fetch => "fetch",
            GitRequestType::Push => "push",
        }
    }
}

impl AsRef<str> for GitRequestType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for GitRequestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a commit request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommitResponseType {
    Success,
    Failure,
}

impl CommitResponseType {
    /// Label value used in `response_type`.
    pub fn as_str(self) -> &'static str {
        match self {
            CommitResponseType::Success => "success",
            CommitResponseType::Failure => "failure",
        }
    }

    /// Maps a handler result onto the outcome label.
    pub fn from_result<T, E>(res: &std::result::Result<T, E>) -> Self {
        if res.is_ok() {
            CommitResponseType::Success
        } else {
            CommitResponseType::Failure
        }
    }
}

impl AsRef<str> for CommitResponseType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for CommitResponseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
