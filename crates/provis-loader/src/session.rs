//! The drop target's state machine and its asynchronous load cycle.
//!
//! ```text
//! Idle --accepted--> Reading --> Parsing --ok--> Idle (navigated away)
//!   |                   |           |
//!   |                   +--- err ---+--> Idle with operation error
//!   +--rejected--> Idle with local error
//! ```
//!
//! Every cycle is tagged with an [`OperationToken`]. Starting a new
//! cycle or calling [`DropTargetState::cancel`] invalidates older
//! tokens, and a cycle holding a stale token neither commits nor
//! navigates.

use std::cell::Cell;
use std::rc::Rc;

use crate::collaborators::{AlgorithmParser, AlgorithmStore, Destination, Navigator, TextSource};
use crate::rejection::DropRejection;
use crate::types::{LoadError, LoadOutcome};

/// Identifies one load cycle.
///
/// Cheap to clone; all clones observe the same shared generation
/// counter.
#[derive(Debug, Clone)]
pub struct OperationToken {
    generation: u64,
    current: Rc<Cell<u64>>,
}

impl OperationToken {
    /// Whether this cycle is still the latest one.
    #[must_use]
    pub fn is_current(&self) -> bool {
        self.current.get() == self.generation
    }

    /// Generation number this token was issued for.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }
}

/// Invalidates in-flight cycles without access to the state itself.
///
/// Useful from teardown hooks that run after the owning state is gone.
#[derive(Debug, Clone)]
pub struct CancelHandle {
    current: Rc<Cell<u64>>,
}

impl CancelHandle {
    /// Make every token issued so far stale.
    pub fn cancel(&self) {
        self.current.set(self.current.get().wrapping_add(1));
    }
}

/// Progress of the asynchronous read/parse cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct OperationState {
    loading: bool,
    error: Option<LoadError>,
}

/// Local state of the drop target.
///
/// Holds two independent error slots: the local slot (rejections) and
/// the operation slot (read and parse failures). Both are displayed
/// when set.
#[derive(Debug, Default)]
pub struct DropTargetState {
    local_error: Option<LoadError>,
    operation: OperationState,
    generation: Rc<Cell<u64>>,
}

impl DropTargetState {
    /// A fresh, idle drop target.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a load cycle is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.operation.loading
    }

    /// The rejection error, if any.
    #[must_use]
    pub const fn local_error(&self) -> Option<&LoadError> {
        self.local_error.as_ref()
    }

    /// The read/parse error of the last cycle, if any.
    #[must_use]
    pub const fn operation_error(&self) -> Option<&LoadError> {
        self.operation.error.as_ref()
    }

    /// Errors to display, local slot first.
    pub fn errors(&self) -> impl Iterator<Item = &LoadError> {
        self.local_error.iter().chain(self.operation.error.iter())
    }

    /// Start a load cycle for an accepted file.
    ///
    /// Clears both error slots, marks the target as loading and
    /// invalidates any earlier cycle.
    pub fn begin_load(&mut self) -> OperationToken {
        self.local_error = None;
        let generation = self.bump();
        self.operation = OperationState {
            loading: true,
            error: None,
        };
        tracing::debug!(generation, "load cycle started");
        OperationToken {
            generation,
            current: Rc::clone(&self.generation),
        }
    }

    /// Record the end of a load cycle.
    ///
    /// Returns `false` and changes nothing if `token` is stale.
    pub fn finish_load(
        &mut self,
        token: &OperationToken,
        result: Result<LoadOutcome, LoadError>,
    ) -> bool {
        if !token.is_current() {
            tracing::debug!(generation = token.generation, "discarding stale load result");
            return false;
        }
        self.operation = OperationState {
            loading: false,
            error: result.err(),
        };
        true
    }

    /// Show the rejection error for a batch of rejected files.
    ///
    /// Replaces the local slot; the operation slot is untouched. An empty
    /// batch changes nothing.
    pub fn reject(&mut self, rejections: &[DropRejection]) {
        let Some(error) = LoadError::from_rejections(rejections) else {
            return;
        };
        for rejection in rejections {
            tracing::debug!(file = %rejection.file_name, codes = ?rejection.errors(), "rejected");
        }
        tracing::warn!(count = rejections.len(), "files rejected: {error}");
        self.local_error = Some(error);
    }

    /// A handle that can cancel this target's cycles from elsewhere.
    #[must_use]
    pub fn cancel_handle(&self) -> CancelHandle {
        CancelHandle {
            current: Rc::clone(&self.generation),
        }
    }

    /// Abandon any in-flight cycle.
    ///
    /// Its result will be discarded and it will not commit or navigate.
    pub fn cancel(&mut self) {
        if self.operation.loading {
            tracing::debug!(generation = self.generation.get(), "load cycle cancelled");
        }
        self.bump();
        self.operation.loading = false;
    }

    fn bump(&mut self) -> u64 {
        let next = self.generation.get().wrapping_add(1);
        self.generation.set(next);
        next
    }
}

/// Run one load cycle: read, parse, commit, navigate.
///
/// If `token` goes stale while the read is pending, the cycle stops
/// with [`LoadOutcome::Cancelled`] before parsing.
///
/// # Errors
///
/// Returns [`LoadError::Read`] if the file cannot be read and
/// [`LoadError::Parse`] if the parser refuses its contents. Neither
/// commits nor navigates.
#[allow(clippy::future_not_send)] // WASM is single-threaded; Send is not needed
pub async fn load_file<T, P, S, N>(
    source: T,
    parser: &P,
    store: &mut S,
    navigator: &mut N,
    token: &OperationToken,
) -> Result<LoadOutcome, LoadError>
where
    T: TextSource,
    P: AlgorithmParser,
    S: AlgorithmStore<P::Output> + ?Sized,
    N: Navigator + ?Sized,
{
    let name = source.name();
    tracing::debug!(file = %name, "reading file");
    let read = source.read_text().await;

    if !token.is_current() {
        return Ok(LoadOutcome::Cancelled);
    }

    let text = read.inspect_err(|e| {
        tracing::warn!(file = %name, detail = ?e.detail(), "file read failed");
    })?;

    let algorithm = parser.parse(&text).map_err(|e| {
        tracing::warn!(file = %name, "parse failed: {e}");
        LoadError::Parse(e.to_string())
    })?;

    tracing::info!(file = %name, bytes = text.len(), "algorithm loaded");
    store.set_algorithm(algorithm);
    navigator.navigate(Destination::Visualizer);
    Ok(LoadOutcome::Loaded)
}
