//! Titled card used on the home page.

use dioxus::prelude::*;

/// A card with a heading and arbitrary content.
#[component]
pub fn HomeCard(title: String, children: Element) -> Element {
    rsx! {
        section { class: "bg-[var(--surface)] rounded-lg p-4 flex flex-col gap-3",
            h2 { class: "text-lg font-semibold text-[var(--text-heading)]", "{title}" }
            {children}
        }
    }
}
