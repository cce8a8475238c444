//! provis-io: Browser I/O and Dioxus component library.
//!
//! Adapts browser file handles to the loader's text sources and
//! provides the reusable UI pieces of the load-from-file page.

pub mod components;
pub mod file;

pub use components::{Dropzone, ErrorAlert, HomeCard};
pub use file::BrowserFile;
