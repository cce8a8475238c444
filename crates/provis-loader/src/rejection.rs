//! Rejection codes produced by the accept filter and their display text.
//!
//! The code set is closed: every variant maps to a message through an
//! exhaustive `match`, so adding a code without a message fails to
//! compile.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Separator placed between per-file rejection messages.
///
/// Each message renders on its own line.
pub const MESSAGE_SEPARATOR: &str = "\n";

/// Reason a candidate file was excluded before any read took place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RejectionCode {
    /// The file's extension or MIME type is not accepted.
    FileInvalidType,
    /// The file is larger than the policy's maximum size.
    FileTooLarge,
    /// The file is smaller than the policy's minimum size.
    FileTooSmall,
    /// More files were offered than the drop target accepts.
    TooManyFiles,
}

impl RejectionCode {
    /// Every code, in declaration order.
    pub const ALL: [Self; 4] = [
        Self::FileInvalidType,
        Self::FileTooLarge,
        Self::FileTooSmall,
        Self::TooManyFiles,
    ];

    /// Wire identifier, as emitted by drop-target widgets.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::FileInvalidType => "file-invalid-type",
            Self::FileTooLarge => "file-too-large",
            Self::FileTooSmall => "file-too-small",
            Self::TooManyFiles => "too-many-files",
        }
    }

    /// Human-readable reason shown to the user.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::FileInvalidType => "Invalid type, only log files are supported.",
            Self::FileTooLarge => "File too large.",
            Self::FileTooSmall => "File too small.",
            Self::TooManyFiles => "Too many files.",
        }
    }
}

impl fmt::Display for RejectionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A wire code that is not part of [`RejectionCode`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown rejection code: {0:?}")]
pub struct UnknownRejectionCode(pub String);

impl FromStr for RejectionCode {
    type Err = UnknownRejectionCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|code| code.code() == s)
            .ok_or_else(|| UnknownRejectionCode(s.to_owned()))
    }
}

/// A file excluded by the accept filter, with every reason it failed.
///
/// Only the first reason is shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropRejection {
    /// Name of the rejected file.
    pub file_name: String,
    /// Reasons in the order they were detected. Never empty.
    errors: Vec<RejectionCode>,
    primary: RejectionCode,
}

impl DropRejection {
    /// Create a rejection with a single reason.
    #[must_use]
    pub fn new(file_name: impl Into<String>, code: RejectionCode) -> Self {
        Self {
            file_name: file_name.into(),
            errors: vec![code],
            primary: code,
        }
    }

    /// Create a rejection from a list of reasons.
    ///
    /// Returns `None` if `errors` is empty, since a rejection without a
    /// reason cannot be displayed.
    #[must_use]
    pub fn with_errors(file_name: impl Into<String>, errors: Vec<RejectionCode>) -> Option<Self> {
        let primary = *errors.first()?;
        Some(Self {
            file_name: file_name.into(),
            errors,
            primary,
        })
    }

    /// All reasons, in detection order.
    #[must_use]
    pub fn errors(&self) -> &[RejectionCode] {
        &self.errors
    }

    /// The reason used for display.
    #[must_use]
    pub const fn primary(&self) -> RejectionCode {
        self.primary
    }

    /// Display line for this rejection.
    #[must_use]
    pub fn message(&self) -> String {
        format!(
            "Could not load algorithm from {}: {}",
            self.file_name,
            self.primary().message()
        )
    }
}

/// Display lines for a batch of rejections, one per rejected file.
///
/// Callers join them with [`MESSAGE_SEPARATOR`] when a single string is
/// needed.
#[must_use]
pub fn rejection_messages(rejections: &[DropRejection]) -> Vec<String> {
    rejections.iter().map(DropRejection::message).collect()
}
