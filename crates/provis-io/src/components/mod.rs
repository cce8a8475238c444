//! Dioxus UI components for provis.
//!
//! Provides the drop zone used to load log files, the inline error
//! banner, and the titled card layout of the home page.

mod dropzone;
mod error_alert;
mod home_card;

pub use dropzone::Dropzone;
pub use error_alert::ErrorAlert;
pub use home_card::HomeCard;
