use dioxus::prelude::*;

mod algorithm;
mod pages;
mod store;

use pages::{Home, Visualizer};
use store::AlgorithmSlot;

/// Client-side routes.
#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/visualizer")]
        Visualizer {},
}

fn main() {
    let level = if cfg!(debug_assertions) {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    if let Err(e) = dioxus::logger::init(level) {
        tracing::warn!("logger already initialized: {e}");
    }
    dioxus::launch(app);
}

/// Root application component.
///
/// Owns the shared [`AlgorithmSlot`] and mounts the router.
fn app() -> Element {
    use_context_provider(AlgorithmSlot::new);

    rsx! {
        // Tailwind CSS utilities, compiled by build.rs.
        style { dangerous_inner_html: include_str!(env!("TAILWIND_CSS_PATH")) }

        Router::<Route> {}
    }
}

/// Page chrome shared by every route.
#[component]
fn Shell() -> Element {
    rsx! {
        div { class: "min-h-screen bg-(--bg) text-(--text) flex flex-col",
            header { class: "px-6 py-4 border-b border-(--border)",
                h1 { class: "text-2xl font-semibold", "provis" }
                p { class: "text-(--muted) text-sm",
                    "Visualizer for trading algorithm logs"
                }
            }
            main { class: "flex-1",
                Outlet::<Route> {}
            }
        }
    }
}
