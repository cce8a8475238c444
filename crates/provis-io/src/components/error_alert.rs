//! Inline error banner.

use dioxus::prelude::*;
use provis_loader::LoadError;

/// A red banner showing a [`LoadError`], one paragraph per line.
#[component]
pub fn ErrorAlert(error: LoadError) -> Element {
    rsx! {
        div {
            class: "bg-(--error-bg) border border-(--error-border) rounded p-3",
            role: "alert",
            for line in error.lines() {
                p { class: "text-(--text-error) text-sm", "{line}" }
            }
        }
    }
}
