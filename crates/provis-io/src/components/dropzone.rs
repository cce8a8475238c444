//! Drop zone with drag-and-drop and a click-to-browse file picker.

use dioxus::html::{FileData, HasFileData};
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::LdLoader;
use provis_loader::{AcceptPolicy, DropRejection, FileMeta};

use crate::file::BrowserFile;

/// Props for the [`Dropzone`] component.
#[derive(Props, Clone, PartialEq)]
pub struct DropzoneProps {
    /// Which files are let through to `on_drop`.
    policy: AcceptPolicy,
    /// Show the loading overlay and ignore new input.
    #[props(default)]
    loading: bool,
    /// Called with the accepted files, only when there is at least one.
    on_drop: EventHandler<Vec<BrowserFile>>,
    /// Called with the rejected files, only when there is at least one.
    on_reject: EventHandler<Vec<DropRejection>>,
    /// Prompt rendered inside the zone.
    children: Element,
}

/// A gesture's files after filtering.
#[derive(Debug)]
struct Sorted<T> {
    accepted: Vec<T>,
    rejections: Vec<DropRejection>,
}

/// Split `files` by `policy`; `metas[i]` describes `files[i]`.
///
/// Nothing is accepted or rejected while `loading`.
fn sort_files<T>(
    files: Vec<T>,
    metas: &[FileMeta],
    policy: &AcceptPolicy,
    loading: bool,
) -> Sorted<T> {
    if loading {
        tracing::debug!(count = files.len(), "input ignored while loading");
        return Sorted {
            accepted: Vec::new(),
            rejections: Vec::new(),
        };
    }
    let partition = policy.partition(metas);
    let accepted = files
        .into_iter()
        .enumerate()
        .filter(|(index, _)| partition.accepted.contains(index))
        .map(|(_, file)| file)
        .collect();
    Sorted {
        accepted,
        rejections: partition.rejections,
    }
}

/// Run a gesture's files through the policy and fire the callbacks.
fn dispatch(
    files: Vec<FileData>,
    policy: &AcceptPolicy,
    loading: bool,
    on_drop: EventHandler<Vec<BrowserFile>>,
    on_reject: EventHandler<Vec<DropRejection>>,
) {
    let files: Vec<BrowserFile> = files.into_iter().map(BrowserFile::new).collect();
    let metas: Vec<FileMeta> = files.iter().map(BrowserFile::meta).collect();
    let sorted = sort_files(files, &metas, policy, loading);

    if !sorted.accepted.is_empty() {
        on_drop.call(sorted.accepted);
    }
    if !sorted.rejections.is_empty() {
        on_reject.call(sorted.rejections);
    }
}

/// A drag-and-drop region that also opens the file picker on click.
///
/// Files are filtered by `policy` before any callback fires. While
/// `loading` is set, drops and picks are ignored and a spinner covers
/// the prompt.
#[component]
pub fn Dropzone(props: DropzoneProps) -> Element {
    let mut dragging = use_signal(|| false);
    let mut picks = use_signal(|| 0_u32);
    let loading = props.loading;
    let on_drop = props.on_drop;
    let on_reject = props.on_reject;

    let handle_files = {
        let policy = props.policy.clone();
        move |evt: FormEvent| {
            *picks.write() += 1;
            dispatch(evt.files(), &policy, loading, on_drop, on_reject);
        }
    };

    let handle_drop = {
        let policy = props.policy.clone();
        move |evt: DragEvent| {
            evt.prevent_default();
            dragging.set(false);
            dispatch(evt.files(), &policy, loading, on_drop, on_reject);
        }
    };

    let accept = props.policy.accept_attribute();
    let multiple = props.policy.multiple;

    let border_class = if dragging() && !loading {
        "border-[var(--border-accent)] bg-[var(--surface-active)]"
    } else {
        "border-[var(--border-muted)] bg-[var(--surface)]"
    };
    let cursor_class = if loading {
        "cursor-wait opacity-60"
    } else {
        "cursor-pointer"
    };

    rsx! {
        label {
            class: "relative block border-2 border-dashed rounded-lg p-6 text-center transition-colors {border_class} {cursor_class}",
            aria_busy: loading,
            ondragover: move |evt| {
                evt.prevent_default();
                dragging.set(true);
            },
            ondragleave: move |_| {
                dragging.set(false);
            },
            ondrop: handle_drop,

            // Re-keyed after every pick so the picker starts empty and
            // choosing the same file again still fires `change`.
            for pick in [picks()] {
                input {
                    key: "{pick}",
                    r#type: "file",
                    accept: "{accept}",
                    multiple,
                    disabled: loading,
                    class: "hidden",
                    onchange: handle_files.clone(),
                }
            }

            {props.children}

            if loading {
                div { class: "absolute inset-0 flex items-center justify-center bg-[var(--surface)]/70",
                    Icon {
                        class: "animate-spin text-[var(--text-secondary)]",
                        width: 32,
                        height: 32,
                        icon: LdLoader,
                    }
                }
            }
        }
    }
}
