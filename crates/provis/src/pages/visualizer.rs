//! Visualizer page.

use dioxus::prelude::*;

use crate::Route;
use crate::store::AlgorithmSlot;

/// Overview of the loaded algorithm.
///
/// Without a loaded algorithm, points the user back to the home page.
#[component]
pub fn Visualizer() -> Element {
    let store = use_context::<AlgorithmSlot>();

    let Some(algorithm) = store.get() else {
        return rsx! {
            div { class: "max-w-3xl mx-auto p-6 flex flex-col gap-3",
                p { class: "text-(--muted) text-lg", "No algorithm loaded." }
                Link { class: "text-(--link) underline", to: Route::Home {}, "Load an algorithm" }
            }
        };
    };

    let products = algorithm.products().join(", ");
    let rows = algorithm.activities.len();
    let sandbox_lines = algorithm.sandbox_log.lines().count();

    rsx! {
        div { class: "max-w-5xl mx-auto p-6 flex flex-col gap-4",
            h2 { class: "text-xl font-semibold text-(--text-heading)", "Visualizer" }
            dl { class: "grid grid-cols-[auto_1fr] gap-x-6 gap-y-1",
                dt { class: "text-(--muted)", "Products" }
                dd { "{products}" }
                dt { class: "text-(--muted)", "Activity rows" }
                dd { "{rows}" }
                dt { class: "text-(--muted)", "Sandbox log lines" }
                dd { "{sandbox_lines}" }
            }
            Link { class: "text-(--link) underline", to: Route::Home {}, "Load another file" }
        }
    }
}
