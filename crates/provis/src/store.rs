//! Application-wide algorithm store and router adapter.
//!
//! The store is a signal provided as context at the root of the app
//! and handed to the loader as an explicit handle.

use std::rc::Rc;

use dioxus::prelude::*;
use dioxus::router::Navigator;
use provis_loader::{AlgorithmStore, Destination};

use crate::Route;
use crate::algorithm::Algorithm;

/// Handle to the currently loaded algorithm.
#[derive(Clone, Copy, PartialEq)]
pub struct AlgorithmSlot(Signal<Option<Rc<Algorithm>>>);

impl AlgorithmSlot {
    /// Create an empty slot owned by the calling scope.
    #[must_use]
    pub fn new() -> Self {
        Self(Signal::new(None))
    }

    /// The loaded algorithm, if any. Subscribes the caller.
    #[must_use]
    pub fn get(&self) -> Option<Rc<Algorithm>> {
        self.0.read().clone()
    }
}

impl Default for AlgorithmSlot {
    fn default() -> Self {
        Self::new()
    }
}

impl AlgorithmStore<Algorithm> for AlgorithmSlot {
    fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.0.set(Some(Rc::new(algorithm)));
    }
}

impl From<Destination> for Route {
    fn from(destination: Destination) -> Self {
        match destination {
            Destination::Visualizer => Self::Visualizer {},
        }
    }
}

/// Routes loader navigation through the Dioxus router.
pub struct RouterNavigator(pub Navigator);

impl provis_loader::Navigator for RouterNavigator {
    fn navigate(&mut self, destination: Destination) {
        tracing::debug!(%destination, "navigating");
        self.0.push(Route::from(destination));
    }
}
