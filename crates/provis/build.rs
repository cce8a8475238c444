// Build scripts signal errors by panicking; there is no caller to
// return Result to.  Cargo treats a non-zero exit as a build failure.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! Build script for the provis binary crate.
//!
//! Runs `npx @tailwindcss/cli` to compile `crates/provis/tailwind.css`
//! into `$OUT_DIR/assets/tailwind.css` and exposes the output path as
//! `TAILWIND_CSS_PATH` for `include_str!` in `main.rs`.
//!
//! When Node.js is unavailable (e.g. a plain `cargo test` on a machine
//! without npm) the raw input stylesheet is copied instead, so the
//! theme variables still load and the crate still compiles.

use std::path::{Path, PathBuf};
use std::process::Command;
use std::{env, fs};

fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap());

    // Workspace root is two levels up from crates/provis/.
    let workspace_root = manifest_dir
        .parent()
        .and_then(Path::parent)
        .expect("could not find workspace root");

    build_tailwind_css(&manifest_dir, workspace_root, &out_dir);
}

/// Compile Tailwind CSS, falling back to the uncompiled input.
///
/// Input:  `crates/provis/tailwind.css`
/// Output: `$OUT_DIR/assets/tailwind.css`
fn build_tailwind_css(manifest_dir: &Path, workspace_root: &Path, out_dir: &Path) {
    let input = manifest_dir.join("tailwind.css");
    let assets_dir = out_dir.join("assets");
    let output = assets_dir.join("tailwind.css");

    fs::create_dir_all(&assets_dir)
        .unwrap_or_else(|e| panic!("failed to create {}: {e}", assets_dir.display()));

    println!("cargo:rerun-if-changed={}", input.display());

    // Tailwind scans the UI crates for utility class names.
    let crates_dir = workspace_root.join("crates");
    register_rs_sources(&crates_dir.join("provis"));
    register_rs_sources(&crates_dir.join("provis-io"));

    let input_lossy = input.to_string_lossy();
    let output_lossy = output.to_string_lossy();
    let mut args: Vec<&str> = vec!["@tailwindcss/cli", "-i", &input_lossy, "-o", &output_lossy];

    let profile = env::var("PROFILE").unwrap_or_default();
    if profile == "release" {
        args.push("--minify");
    }

    let compiled = Command::new("npx")
        .args(&args)
        .status()
        .is_ok_and(|status| status.success());

    if !compiled {
        println!(
            "cargo:warning=`npx @tailwindcss/cli` unavailable or failed; \
             using uncompiled {}",
            input.display()
        );
        fs::copy(&input, &output).unwrap_or_else(|e| {
            panic!(
                "failed to copy {} to {}: {e}",
                input.display(),
                output.display()
            )
        });
    }

    println!("cargo:rustc-env=TAILWIND_CSS_PATH={}", output.display());
}

/// Recursively emit `cargo:rerun-if-changed` for every `.rs` file
/// under `dir`.
fn register_rs_sources(dir: &Path) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            register_rs_sources(&path);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            println!("cargo:rerun-if-changed={}", path.display());
        }
    }
}
