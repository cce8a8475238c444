//! provis-loader: Pure load-from-file logic (sans-IO).
//!
//! Takes the files a user drops or selects, filters them through an
//! [`AcceptPolicy`], turns rejections into display messages, and runs
//! the read -> parse -> commit -> navigate cycle against injected
//! collaborators.
//!
//! This crate has **no browser dependencies**. Reading files, rendering
//! and routing live in `provis-io` and the `provis` app.

pub mod collaborators;
pub mod policy;
pub mod rejection;
pub mod session;
pub mod types;

pub use collaborators::{AlgorithmParser, AlgorithmStore, Destination, Navigator, TextSource};
pub use policy::{AcceptPolicy, Partition, PolicyError};
pub use rejection::{DropRejection, MESSAGE_SEPARATOR, RejectionCode, UnknownRejectionCode};
pub use session::{CancelHandle, DropTargetState, OperationToken, load_file};
pub use types::{FileMeta, LoadError, LoadOutcome, ReadError};
