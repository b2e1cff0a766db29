/// Crate-level error types for tagnav diagnostics.
use std::path::PathBuf;

/// Every error names the file, query, or pattern that caused it so the
/// binaries can print a useful one-line diagnostic.
#[allow(clippy::error_impl_error, reason = "crate-level error type re-exported as tagnav::Error")]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A `--pattern` argument is not a valid regular expression.
    #[error("invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        /// The pattern text as given on the command line.
        pattern: String,
        /// The underlying regex compilation error.
        source: regex::Error,
    },

    /// Underlying I/O error from the filesystem.
    #[error("io: {0}")]
    Io(
        /// The wrapped I/O error.
        #[from]
        std::io::Error,
    ),

    /// JSON rendering failed.
    #[error("json: {0}")]
    Json(
        /// The wrapped serialization error.
        #[from]
        serde_json::Error,
    ),

    /// The tag file holds no usable entries for the target after filtering.
    #[error("No entries found for {file}")]
    NoEntries {
        /// Target file name exactly as it was requested.
        file: String,
    },

    /// No entry name contains the query.
    #[error("Section matching '{query}' not found")]
    SectionNotFound {
        /// The query that failed to match.
        query: String,
    },

    /// The tags index file does not exist on disk.
    #[error("tags file not found: {}", path.display())]
    TagsFileNotFound {
        /// Path to the missing tags file.
        path: PathBuf,
    },

    /// The document an excerpt was requested from does not exist on disk.
    #[error("target file not found: {}", path.display())]
    TargetNotFound {
        /// Path to the missing document.
        path: PathBuf,
    },
}

impl Error {
    /// True for the two expected "nothing found" outcomes, which the
    /// binaries report on stdout without an `error:` prefix.
    pub const fn is_not_found(&self) -> bool {
        return matches!(self, Self::NoEntries { .. } | Self::SectionNotFound { .. });
    }
}
