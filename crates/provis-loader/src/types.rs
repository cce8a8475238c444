//! Shared types for the load-from-file flow.

use serde::{Deserialize, Serialize};

use crate::rejection::{DropRejection, MESSAGE_SEPARATOR, rejection_messages};

/// Metadata of a candidate file, inspected by the accept filter before
/// any read happens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMeta {
    /// File name as reported by the browser (no directory part).
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    /// MIME type, if the platform reported one.
    pub mime_type: Option<String>,
}

impl FileMeta {
    /// Create metadata without a MIME type.
    #[must_use]
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
            mime_type: None,
        }
    }

    /// Attach a MIME type. Empty strings are treated as absent.
    #[must_use]
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        let mime_type = mime_type.into();
        self.mime_type = (!mime_type.is_empty()).then_some(mime_type);
        self
    }

    /// Lowercased extension, if the name has one.
    #[must_use]
    pub fn extension(&self) -> Option<String> {
        self.name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .filter(|ext| !ext.is_empty())
    }
}

/// Failure of the single-shot text read.
///
/// The user-facing text is fixed; `detail` carries whatever the
/// platform reported and is only logged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("FileReader emitted an error event")]
pub struct ReadError {
    detail: Option<String>,
}

impl ReadError {
    /// A read failure with no further information.
    #[must_use]
    pub const fn new() -> Self {
        Self { detail: None }
    }

    /// A read failure carrying platform detail for diagnostics.
    #[must_use]
    pub fn with_detail(detail: impl Into<String>) -> Self {
        Self {
            detail: Some(detail.into()),
        }
    }

    /// Platform detail, if any.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }
}

impl Default for ReadError {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors surfaced by the drop target.
///
/// All of them are recoverable by trying again with another file.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    /// One or more files were excluded by the accept filter.
    #[error("{}", .0.join(MESSAGE_SEPARATOR))]
    Rejected(Vec<String>),

    /// The file could not be read as text.
    #[error(transparent)]
    Read(#[from] ReadError),

    /// The parser refused the file contents.
    #[error("{0}")]
    Parse(String),
}

impl LoadError {
    /// Build the combined rejection error for a batch of rejections.
    ///
    /// Returns `None` for an empty batch.
    #[must_use]
    pub fn from_rejections(rejections: &[DropRejection]) -> Option<Self> {
        if rejections.is_empty() {
            return None;
        }
        Some(Self::Rejected(rejection_messages(rejections)))
    }

    /// Individual display lines.
    ///
    /// Rejections yield one line per file; other errors a single line.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        match self {
            Self::Rejected(messages) => messages.clone(),
            other => vec![other.to_string()],
        }
    }
}

/// How a load cycle ended when it did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The algorithm was stored and the visualizer opened.
    Loaded,
    /// The cycle was superseded or the drop target went away; nothing
    /// was committed.
    Cancelled,
}
