//! Routed pages of the app.

mod home;
mod visualizer;

pub use home::Home;
pub use visualizer::Visualizer;
