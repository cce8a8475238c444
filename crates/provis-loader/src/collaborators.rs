//! Narrow interfaces to the collaborators of the load cycle.
//!
//! The drop target never owns a parser, store or router. It is handed
//! implementations of these traits, which keeps the cycle testable with
//! in-memory fakes.

use std::fmt;
use std::future::Future;

use crate::types::ReadError;

/// A single accepted file that can be read once as text.
///
/// `read_text` consumes the source: the read is single-shot and ends in
/// exactly one of success or failure.
pub trait TextSource {
    /// File name, for logging.
    fn name(&self) -> String;

    /// Read the whole file as UTF-8 text.
    fn read_text(self) -> impl Future<Output = Result<String, ReadError>>;
}

/// Turns raw log text into a structured algorithm.
///
/// Implementations must be synchronous, deterministic and free of side
/// effects.
pub trait AlgorithmParser {
    /// The parsed algorithm.
    type Output;
    /// Why the text was refused. Only its `Display` text reaches the user.
    type Error: fmt::Display;

    /// Parse the full contents of a log file.
    ///
    /// # Errors
    ///
    /// Returns `Self::Error` if the text is not a valid log.
    fn parse(&self, text: &str) -> Result<Self::Output, Self::Error>;
}

impl<F, T, E> AlgorithmParser for F
where
    F: Fn(&str) -> Result<T, E>,
    E: fmt::Display,
{
    type Output = T;
    type Error = E;

    fn parse(&self, text: &str) -> Result<T, E> {
        self(text)
    }
}

/// Externally-owned holder of the current algorithm.
///
/// Setting never fails.
pub trait AlgorithmStore<A> {
    /// Replace the current algorithm.
    fn set_algorithm(&mut self, algorithm: A);
}

/// Views the drop target can send the user to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Destination {
    /// The algorithm visualizer.
    Visualizer,
}

impl Destination {
    /// Route path of the view.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Visualizer => "/visualizer",
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Client-side navigation. Fire-and-forget.
pub trait Navigator {
    /// Switch the active view.
    fn navigate(&mut self, destination: Destination);
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_parsers() {
        let parser = |text: &str| text.parse::<u32>().map_err(|e| e.to_string());
        assert_eq!(parser.parse("42").unwrap(), 42);
        assert!(parser.parse("forty-two").is_err());
    }

    #[test]
    fn visualizer_path() {
        assert_eq!(Destination::Visualizer.path(), "/visualizer");
        assert_eq!(Destination::Visualizer.to_string(), "/visualizer");
    }
}
