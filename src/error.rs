//! Error types for the citycache library.
//!
//! ## Key Components
//!
//! - [`ConfigError`]: Returned when cache configuration parameters are invalid
//!   (e.g. zero capacity passed to a fallible constructor).
//! - [`InvariantError`]: Returned when internal data-structure invariants are
//!   violated (`check_invariants` methods on the policy cores).
//! - [`SourceError`]: Returned by lookup backends for I/O and parse failures.
//!   Absence of a record is **not** an error; backends report it as `Ok(None)`.
//!
//! ## Example Usage
//!
//! ```
//! use citycache::cache::{BoundedCache, PolicyKind};
//! use citycache::error::ConfigError;
//!
//! // Fallible constructor rejects a zero capacity
//! let bad: Result<BoundedCache, ConfigError> = BoundedCache::try_new(0, PolicyKind::Lru);
//! assert!(bad.is_err());
//! ```

use std::fmt;
use std::io;

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when cache configuration parameters are invalid.
///
/// Produced by fallible constructors such as
/// [`BoundedCache::try_new`](crate::cache::BoundedCache::try_new). Carries a
/// human-readable description of which parameter failed validation.
///
/// # Example
///
/// ```
/// use citycache::cache::{BoundedCache, PolicyKind};
///
/// let err = BoundedCache::try_new(0, PolicyKind::Fifo).unwrap_err();
/// assert!(err.to_string().contains("capacity"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl ConfigError {
    /// Creates a new `ConfigError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when internal cache invariants are violated.
///
/// Produced by `check_invariants` methods on the policy cores (e.g.
/// [`LfuPolicy::check_invariants`](crate::policy::lfu::LfuPolicy::check_invariants)).
/// An `Err` from one of those methods always indicates a bug in this library,
/// never a caller mistake; the mutating paths guard the same conditions with
/// `debug_assert!` in debug builds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

// ---------------------------------------------------------------------------
// SourceError
// ---------------------------------------------------------------------------

/// Error returned by lookup backends.
///
/// Covers the two ways a backend can actually fail: the underlying file
/// cannot be read, or a data row is malformed. A missing record is an
/// expected outcome and is reported as `Ok(None)` by
/// [`PopulationSource::resolve`](crate::source::PopulationSource::resolve),
/// never as a `SourceError`.
#[derive(Debug)]
pub enum SourceError {
    /// The backing file could not be opened or read.
    Io(io::Error),
    /// A data row could not be parsed (1-based line number included).
    Parse { line: usize, message: String },
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Io(err) => write!(f, "source i/o error: {err}"),
            SourceError::Parse { line, message } => {
                write!(f, "source parse error at line {line}: {message}")
            }
        }
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SourceError::Io(err) => Some(err),
            SourceError::Parse { .. } => None,
        }
    }
}

impl From<io::Error> for SourceError {
    fn from(err: io::Error) -> Self {
        SourceError::Io(err)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
