//! Home page and its load-from-file card.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::LdUpload;
use provis_io::{BrowserFile, Dropzone, ErrorAlert, HomeCard};
use provis_loader::{AcceptPolicy, DropRejection, DropTargetState, LoadError, load_file};

use crate::algorithm::parse_algorithm_logs;
use crate::store::{AlgorithmSlot, RouterNavigator};

/// Landing page.
#[component]
pub fn Home() -> Element {
    rsx! {
        div { class: "max-w-3xl mx-auto flex flex-col gap-6 p-6",
            LoadFromFile {}
        }
    }
}

#[component]
fn DropzoneContent() -> Element {
    rsx! {
        div { class: "flex items-center justify-center gap-8 min-h-20 pointer-events-none",
            Icon { width: 40, height: 40, icon: LdUpload }
            span { class: "text-xl", "Drag file here or click to select file" }
        }
    }
}

/// Accept filter for the load card: one file of any type, any size.
///
/// An invalid policy is logged and used as is; the filter still runs.
fn accept_policy() -> AcceptPolicy {
    let policy = AcceptPolicy::default();
    if let Err(e) = policy.validate() {
        tracing::warn!("{e}");
    }
    policy
}

/// Card that loads an algorithm log from a local file.
///
/// Accepts a single file, reads it, parses it into the shared
/// [`AlgorithmSlot`] and opens the visualizer. Rejections and load
/// failures are shown as separate banners.
#[component]
pub fn LoadFromFile() -> Element {
    let mut target = use_signal(DropTargetState::new);
    let store = use_context::<AlgorithmSlot>();
    let navigator = use_navigator();
    let policy = use_hook(accept_policy);

    // A cycle still pending when the card unmounts must not commit.
    let cancel = use_hook(|| target.peek().cancel_handle());
    use_drop(move || cancel.cancel());

    let on_drop = move |files: Vec<BrowserFile>| {
        let Some(file) = files.into_iter().next() else {
            return;
        };
        let token = target.write().begin_load();
        let mut store = store;
        let mut navigator = RouterNavigator(navigator);
        spawn(async move {
            let result = load_file(
                file,
                &parse_algorithm_logs,
                &mut store,
                &mut navigator,
                &token,
            )
            .await;
            target.write().finish_load(&token, result);
        });
    };

    let on_reject = move |rejections: Vec<DropRejection>| {
        target.write().reject(&rejections);
    };

    let errors: Vec<LoadError> = target.read().errors().cloned().collect();
    let loading = target.read().is_loading();

    rsx! {
        HomeCard { title: "Load from file",
            p { class: "text-(--text-secondary)",
                "Supports log files that are in the same format as the ones generated by the \
                 Prosperity servers. This format is undocumented, but you can get an idea of what \
                 it looks like by downloading a log file from a submitted algorithm."
            }

            for (index, error) in errors.into_iter().enumerate() {
                ErrorAlert { key: "{index}", error }
            }

            Dropzone {
                policy,
                loading,
                on_drop,
                on_reject,
                DropzoneContent {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use provis_loader::FileMeta;

    use super::*;

    #[test]
    fn load_card_policy_is_valid_and_single_file() {
        let policy = accept_policy();
        assert!(policy.validate().is_ok());
        assert!(!policy.multiple);
    }

    #[test]
    fn load_card_accepts_any_file_type() {
        let partition = accept_policy().partition(&[FileMeta::new("round1.txt", 10)]);
        assert_eq!(partition.accepted, vec![0]);
        assert!(partition.rejections.is_empty());
    }
}
