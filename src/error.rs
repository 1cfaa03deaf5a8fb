//! Unified error types for branch-compare.
//!
//! The diff engine reports its own [`DiffError`]; loading, parsing and
//! reporting failures are wrapped in [`BranchCompareError`] together with a
//! context chain describing where they happened.

use crate::diff::Branch;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for branch-compare operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum BranchCompareError {
    /// Errors while obtaining a manifest from its source
    #[error("Failed to load manifest: {context}")]
    Load {
        context: String,
        #[source]
        source: LoadErrorKind,
    },

    /// Errors while decoding a manifest document
    #[error("Failed to parse manifest: {context}")]
    Parse {
        context: String,
        #[source]
        source: ParseErrorKind,
    },

    /// Errors raised by the merge-diff engine
    #[error("Diff computation failed: {context}")]
    Diff {
        context: String,
        #[source]
        source: DiffError,
    },

    /// Errors during report generation
    #[error("Report generation failed: {context}")]
    Report {
        context: String,
        #[source]
        source: ReportErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific load error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum LoadErrorKind {
    #[error("Invalid branch identifier '{0}'")]
    InvalidBranch(String),

    #[error("Branch '{0}' cannot be compared with itself")]
    SameBranch(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Server returned HTTP {status} for {url}")]
    HttpStatus { status: u16, url: String },

    #[error("Cache error: {0}")]
    Cache(String),

    #[error("Manifest download is unavailable: {0}")]
    FeatureDisabled(String),
}

/// Specific parse error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ParseErrorKind {
    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),

    #[error("Missing required field: {field} in {context}")]
    MissingField { field: String, context: String },
}

/// Errors of the merge-diff engine.
///
/// Any of these aborts the comparison; statistics gathered so far are dropped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DiffError {
    /// A manifest has no records, so the scan has nothing to start from
    #[error("{side} manifest has no packages")]
    EmptyManifest { side: Branch },

    /// A manifest returned no record for an index below its length
    #[error("{side} manifest yields no package at index {index}")]
    CorruptManifest { side: Branch, index: usize },
}

/// Specific report error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ReportErrorKind {
    #[error("JSON serialization failed: {0}")]
    JsonSerializationError(String),

    #[error("Recorded index no longer resolves: {0}")]
    DanglingIndex(String),
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for branch-compare operations
pub type Result<T> = std::result::Result<T, BranchCompareError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl BranchCompareError {
    /// Create a load error with context
    pub fn load(context: impl Into<String>, source: LoadErrorKind) -> Self {
        Self::Load {
            context: context.into(),
            source,
        }
    }

    /// Create a parse error with context
    pub fn parse(context: impl Into<String>, source: ParseErrorKind) -> Self {
        Self::Parse {
            context: context.into(),
            source,
        }
    }

    /// Create a parse error for missing field
    pub fn missing_field(field: impl Into<String>, context: impl Into<String>) -> Self {
        Self::parse(
            "missing required field",
            ParseErrorKind::MissingField {
                field: field.into(),
                context: context.into(),
            },
        )
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a diff error
    pub fn diff(context: impl Into<String>, source: DiffError) -> Self {
        Self::Diff {
            context: context.into(),
            source,
        }
    }

    /// Create a report error
    pub fn report(context: impl Into<String>, source: ReportErrorKind) -> Self {
        Self::Report {
            context: context.into(),
            source,
        }
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for BranchCompareError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for BranchCompareError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(
            "JSON deserialization",
            ParseErrorKind::InvalidJson(err.to_string()),
        )
    }
}

impl From<DiffError> for BranchCompareError {
    fn from(err: DiffError) -> Self {
        Self::diff(String::new(), err)
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// Context strings are chained outermost first, so a failure deep in the
/// loader reads `"loading p10: parsing manifest: <cause>"`.
///
/// # Example
///
/// ```ignore
/// use branch_compare::error::ErrorContext;
///
/// fn read_manifest(path: &Path) -> Result<BranchManifest> {
///     let raw = std::fs::read(path).context("reading manifest file")?;
///     BranchManifest::from_slice("p10", &raw)
///         .with_context(|| format!("parsing {}", path.display()))
/// }
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<BranchCompareError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: BranchCompareError, new_ctx: &str) -> BranchCompareError {
    match err {
        BranchCompareError::Load {
            context: existing,
            source,
        } => BranchCompareError::Load {
            context: chain_context(new_ctx, &existing),
            source,
        },
        BranchCompareError::Parse {
            context: existing,
            source,
        } => BranchCompareError::Parse {
            context: chain_context(new_ctx, &existing),
            source,
        },
        BranchCompareError::Diff {
            context: existing,
            source,
        } => BranchCompareError::Diff {
            context: chain_context(new_ctx, &existing),
            source,
        },
        BranchCompareError::Report {
            context: existing,
            source,
        } => BranchCompareError::Report {
            context: chain_context(new_ctx, &existing),
            source,
        },
        BranchCompareError::Io {
            path,
            message,
            source,
        } => BranchCompareError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        BranchCompareError::Validation(msg) => {
            BranchCompareError::Validation(chain_context(new_ctx, &msg))
        }
    }
}

/// Chain two context strings together.
///
/// If the existing context is empty, returns just the new context.
/// Otherwise, returns "`new_context`: `existing_context`".
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}
