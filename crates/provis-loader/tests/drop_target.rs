//! Integration test: drive the drop target through full load cycles with
//! in-memory collaborators.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;
use futures::executor::{LocalPool, block_on};
use futures::task::LocalSpawnExt;
use provis_loader::{
    AcceptPolicy, AlgorithmStore, Destination, DropTargetState, FileMeta, LoadError, LoadOutcome,
    MESSAGE_SEPARATOR, Navigator, ReadError, RejectionCode, TextSource, load_file,
};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Algorithm {
    lines: usize,
}

fn parse_log(text: &str) -> Result<Algorithm, String> {
    if !text.contains("Activities log:") {
        return Err("Invalid log file: missing activities log".to_owned());
    }
    Ok(Algorithm {
        lines: text.lines().count(),
    })
}

#[derive(Clone, Default)]
struct SharedStore(Rc<RefCell<Vec<Algorithm>>>);

impl AlgorithmStore<Algorithm> for SharedStore {
    fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.0.borrow_mut().push(algorithm);
    }
}

#[derive(Clone, Default)]
struct SharedNavigator(Rc<RefCell<Vec<Destination>>>);

impl Navigator for SharedNavigator {
    fn navigate(&mut self, destination: Destination) {
        self.0.borrow_mut().push(destination);
    }
}

/// A file whose read finishes immediately with a scripted result.
struct Scripted {
    name: &'static str,
    result: Result<String, ReadError>,
}

impl Scripted {
    fn text(name: &'static str, text: &str) -> Self {
        Self {
            name,
            result: Ok(text.to_owned()),
        }
    }

    fn failing(name: &'static str) -> Self {
        Self {
            name,
            result: Err(ReadError::with_detail("NotReadableError")),
        }
    }
}

impl TextSource for Scripted {
    fn name(&self) -> String {
        self.name.to_owned()
    }

    async fn read_text(self) -> Result<String, ReadError> {
        self.result
    }
}

/// A file whose read completes when the test sends its contents.
struct Pending {
    rx: oneshot::Receiver<Result<String, ReadError>>,
}

impl TextSource for Pending {
    fn name(&self) -> String {
        "slow.log".to_owned()
    }

    async fn read_text(self) -> Result<String, ReadError> {
        self.rx.await.unwrap_or_else(|_| Err(ReadError::new()))
    }
}

const VALID_LOG: &str = "Sandbox logs:\n\nActivities log:\nday;timestamp;product\n";

struct Harness {
    state: DropTargetState,
    store: SharedStore,
    navigator: SharedNavigator,
}

impl Harness {
    fn new() -> Self {
        Self {
            state: DropTargetState::new(),
            store: SharedStore::default(),
            navigator: SharedNavigator::default(),
        }
    }

    fn drop_file(&mut self, source: impl TextSource) -> Result<LoadOutcome, LoadError> {
        let token = self.state.begin_load();
        let result = block_on(load_file(
            source,
            &parse_log,
            &mut self.store,
            &mut self.navigator,
            &token,
        ));
        self.state.finish_load(&token, result.clone());
        result
    }

    fn commits(&self) -> Vec<Algorithm> {
        self.store.0.borrow().clone()
    }

    fn visits(&self) -> Vec<Destination> {
        self.navigator.0.borrow().clone()
    }
}

#[test]
fn valid_file_commits_once_and_navigates_once() {
    let mut h = Harness::new();
    let outcome = h.drop_file(Scripted::text("round1.log", VALID_LOG)).unwrap();

    assert_eq!(outcome, LoadOutcome::Loaded);
    assert_eq!(h.commits(), vec![Algorithm { lines: 4 }]);
    assert_eq!(h.visits(), vec![Destination::Visualizer]);
    assert!(!h.state.is_loading());
    assert_eq!(h.state.errors().count(), 0);
}

#[test]
fn parser_failure_sets_operation_error_only() {
    let mut h = Harness::new();
    let err = h.drop_file(Scripted::text("empty.log", "nothing here")).unwrap_err();

    assert_eq!(
        err,
        LoadError::Parse("Invalid log file: missing activities log".to_owned())
    );
    assert!(h.commits().is_empty());
    assert!(h.visits().is_empty());
    assert!(h.state.local_error().is_none());
    assert_eq!(
        h.state.operation_error().unwrap().to_string(),
        "Invalid log file: missing activities log"
    );
    assert!(!h.state.is_loading());
}

#[test]
fn reader_failure_reports_fixed_message() {
    let mut h = Harness::new();
    h.drop_file(Scripted::failing("locked.log")).unwrap_err();

    let shown = h.state.operation_error().unwrap().to_string();
    assert!(shown.contains("FileReader emitted an error event"));
    assert!(h.commits().is_empty());
    assert!(h.visits().is_empty());
}

#[test]
fn second_valid_drop_overwrites_and_navigates_again() {
    let mut h = Harness::new();
    h.drop_file(Scripted::text("round1.log", VALID_LOG)).unwrap();
    let longer = format!("{VALID_LOG}1;100;KELP\n");
    h.drop_file(Scripted::text("round2.log", &longer)).unwrap();

    assert_eq!(
        h.commits(),
        vec![Algorithm { lines: 4 }, Algorithm { lines: 5 }]
    );
    assert_eq!(
        h.visits(),
        vec![Destination::Visualizer, Destination::Visualizer]
    );
    assert_eq!(h.state.errors().count(), 0);
}

#[test]
fn successful_drop_after_failure_clears_error() {
    let mut h = Harness::new();
    h.drop_file(Scripted::failing("locked.log")).unwrap_err();
    h.drop_file(Scripted::text("round1.log", VALID_LOG)).unwrap();
    assert_eq!(h.state.errors().count(), 0);
    assert_eq!(h.visits().len(), 1);
}

#[test]
fn rejections_produce_one_line_per_file() {
    let policy = AcceptPolicy::default();
    let candidates = [
        FileMeta::new("a.log", 10),
        FileMeta::new("b.log", 10),
        FileMeta::new("c.csv", 10),
    ];
    let partition = policy.partition(&candidates);
    assert!(partition.accepted.is_empty());

    let mut h = Harness::new();
    h.state.reject(&partition.rejections);

    let shown = h.state.local_error().unwrap().to_string();
    let lines: Vec<_> = shown.split(MESSAGE_SEPARATOR).collect();
    assert_eq!(lines.len(), 3);
    for (line, file) in lines.iter().zip(["a.log", "b.log", "c.csv"]) {
        assert_eq!(
            *line,
            format!(
                "Could not load algorithm from {file}: {}",
                RejectionCode::TooManyFiles.message()
            )
        );
    }
    assert!(h.state.operation_error().is_none());
    assert!(h.commits().is_empty());
}

#[test]
fn too_large_file_message() {
    let policy = AcceptPolicy {
        max_size: Some(1024),
        ..AcceptPolicy::default()
    };
    let partition = policy.partition(&[FileMeta::new("big.log", 4096)]);

    let mut h = Harness::new();
    h.state.reject(&partition.rejections);
    assert_eq!(
        h.state.local_error().unwrap().to_string(),
        "Could not load algorithm from big.log: File too large."
    );
}

#[test]
fn cancel_during_read_commits_nothing() {
    let mut pool = LocalPool::new();
    let spawner = pool.spawner();

    let state = Rc::new(RefCell::new(DropTargetState::new()));
    let store = SharedStore::default();
    let navigator = SharedNavigator::default();
    let (tx, rx) = oneshot::channel();

    let token = state.borrow_mut().begin_load();
    {
        let state = Rc::clone(&state);
        let mut store = store.clone();
        let mut navigator = navigator.clone();
        spawner
            .spawn_local(async move {
                let result = load_file(
                    Pending { rx },
                    &parse_log,
                    &mut store,
                    &mut navigator,
                    &token,
                )
                .await;
                assert_eq!(result, Ok(LoadOutcome::Cancelled));
                state.borrow_mut().finish_load(&token, result);
            })
            .unwrap();
    }

    pool.run_until_stalled();
    assert!(state.borrow().is_loading());

    // The drop target goes away while the read is pending.
    state.borrow_mut().cancel();
    tx.send(Ok(VALID_LOG.to_owned())).unwrap();
    pool.run();

    assert!(store.0.borrow().is_empty());
    assert!(navigator.0.borrow().is_empty());
    assert!(!state.borrow().is_loading());
    assert_eq!(state.borrow().errors().count(), 0);
}

#[test]
fn newer_drop_supersedes_pending_read() {
    let mut pool = LocalPool::new();
    let spawner = pool.spawner();

    let state = Rc::new(RefCell::new(DropTargetState::new()));
    let store = SharedStore::default();
    let navigator = SharedNavigator::default();
    let (tx, rx) = oneshot::channel();

    let stale = state.borrow_mut().begin_load();
    {
        let state = Rc::clone(&state);
        let mut store = store.clone();
        let mut navigator = navigator.clone();
        spawner
            .spawn_local(async move {
                let result =
                    load_file(Pending { rx }, &parse_log, &mut store, &mut navigator, &stale)
                        .await;
                state.borrow_mut().finish_load(&stale, result);
            })
            .unwrap();
    }
    pool.run_until_stalled();

    let fresh = state.borrow_mut().begin_load();
    let result = block_on(load_file(
        Scripted::text("round2.log", VALID_LOG),
        &parse_log,
        &mut store.clone(),
        &mut navigator.clone(),
        &fresh,
    ));
    state.borrow_mut().finish_load(&fresh, result);

    tx.send(Err(ReadError::new())).unwrap();
    pool.run();

    assert_eq!(store.0.borrow().len(), 1);
    assert_eq!(navigator.0.borrow().len(), 1);
    assert_eq!(state.borrow().errors().count(), 0);
}
