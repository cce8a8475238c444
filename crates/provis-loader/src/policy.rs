//! Accept filtering for the drop target.
//!
//! [`AcceptPolicy`] decides which dropped or selected files reach the
//! load cycle. Files that fail are turned into [`DropRejection`]s.

use serde::{Deserialize, Serialize};

use crate::rejection::{DropRejection, RejectionCode};
use crate::types::FileMeta;

/// Invalid [`AcceptPolicy`] configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PolicyError {
    /// `min_size` exceeds `max_size`.
    #[error("invalid accept policy: min_size ({min}) > max_size ({max})")]
    SizeRange {
        /// Configured minimum size in bytes.
        min: u64,
        /// Configured maximum size in bytes.
        max: u64,
    },

    /// An extension or MIME entry is blank and could never match.
    #[error("invalid accept policy: blank entry in accepted types")]
    BlankType,
}

/// Which files the drop target lets through.
///
/// A file passes the type check if its extension or its MIME type is
/// listed. Extensions are compared case-insensitively and without the
/// leading dot. With both lists empty (the default) every type passes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AcceptPolicy {
    /// Accepted extensions, without the leading dot. Empty with empty
    /// `mime_types` means any type.
    pub extensions: Vec<String>,
    /// Accepted MIME types.
    pub mime_types: Vec<String>,
    /// Minimum size in bytes (inclusive).
    pub min_size: u64,
    /// Maximum size in bytes (inclusive). `None` means unbounded.
    pub max_size: Option<u64>,
    /// Whether more than one file may be accepted per gesture.
    pub multiple: bool,
}

/// Result of running a batch of candidates through the policy.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Partition {
    /// Indices of accepted candidates, in input order.
    pub accepted: Vec<usize>,
    /// Rejections, in input order.
    pub rejections: Vec<DropRejection>,
}

impl AcceptPolicy {
    /// Accept only files with one of `extensions`, otherwise defaults.
    #[must_use]
    pub fn with_extensions<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            extensions: extensions.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Check the configuration for contradictions.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError::SizeRange`] if `min_size > max_size` and
    /// [`PolicyError::BlankType`] if an accepted type is empty.
    pub fn validate(&self) -> Result<(), PolicyError> {
        if let Some(max) = self.max_size
            && self.min_size > max
        {
            return Err(PolicyError::SizeRange {
                min: self.min_size,
                max,
            });
        }
        if self
            .extensions
            .iter()
            .chain(&self.mime_types)
            .any(|entry| entry.trim_start_matches('.').trim().is_empty())
        {
            return Err(PolicyError::BlankType);
        }
        Ok(())
    }

    /// Value for an `<input type="file" accept=...>` attribute.
    ///
    /// Empty when every type is accepted.
    #[must_use]
    pub fn accept_attribute(&self) -> String {
        self.extensions
            .iter()
            .map(|ext| format!(".{ext}"))
            .chain(self.mime_types.iter().cloned())
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Every reason `file` fails the policy, in check order (type, then
    /// size). Empty if the file is acceptable.
    #[must_use]
    pub fn check(&self, file: &FileMeta) -> Vec<RejectionCode> {
        let mut errors = Vec::new();
        if !self.accepts_type(file) {
            errors.push(RejectionCode::FileInvalidType);
        }
        if self.max_size.is_some_and(|max| file.size > max) {
            errors.push(RejectionCode::FileTooLarge);
        }
        if file.size < self.min_size {
            errors.push(RejectionCode::FileTooSmall);
        }
        errors
    }

    fn accepts_type(&self, file: &FileMeta) -> bool {
        if self.extensions.is_empty() && self.mime_types.is_empty() {
            return true;
        }
        let by_extension = file.extension().is_some_and(|ext| {
            self.extensions
                .iter()
                .any(|allowed| allowed.trim_start_matches('.').eq_ignore_ascii_case(&ext))
        });
        let by_mime = file.mime_type.as_deref().is_some_and(|mime| {
            self.mime_types
                .iter()
                .any(|allowed| allowed.eq_ignore_ascii_case(mime))
        });
        by_extension || by_mime
    }

    /// Split a gesture's candidates into accepted indices and rejections.
    ///
    /// When more than one file is offered and `multiple` is off, every
    /// candidate is rejected with [`RejectionCode::TooManyFiles`] and
    /// nothing is accepted.
    #[must_use]
    pub fn partition(&self, candidates: &[FileMeta]) -> Partition {
        if !self.multiple && candidates.len() > 1 {
            return Partition {
                accepted: Vec::new(),
                rejections: candidates
                    .iter()
                    .map(|file| DropRejection::new(file.name.clone(), RejectionCode::TooManyFiles))
                    .collect(),
            };
        }

        let mut partition = Partition::default();
        for (index, file) in candidates.iter().enumerate() {
            match DropRejection::with_errors(file.name.clone(), self.check(file)) {
                Some(rejection) => partition.rejections.push(rejection),
                None => partition.accepted.push(index),
            }
        }
        partition
    }
}
