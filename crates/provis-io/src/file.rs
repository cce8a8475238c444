//! Adapter from Dioxus file handles to the loader's [`TextSource`].

use dioxus::html::FileData;
use provis_loader::{FileMeta, ReadError, TextSource};

/// A file picked or dropped in the browser.
pub struct BrowserFile {
    data: FileData,
}

impl BrowserFile {
    /// Wrap a Dioxus file handle.
    #[must_use]
    pub const fn new(data: FileData) -> Self {
        Self { data }
    }

    /// Metadata used by the accept filter.
    #[must_use]
    pub fn meta(&self) -> FileMeta {
        let meta = FileMeta::new(self.data.name(), self.data.size());
        match self.data.content_type() {
            Some(mime) => meta.with_mime_type(mime),
            None => meta,
        }
    }
}

impl TextSource for BrowserFile {
    fn name(&self) -> String {
        self.data.name()
    }

    #[allow(clippy::future_not_send)] // WASM is single-threaded; Send is not needed
    async fn read_text(self) -> Result<String, ReadError> {
        self.data
            .read_string()
            .await
            .map_err(|e| ReadError::with_detail(e.to_string()))
    }
}
