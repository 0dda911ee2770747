// Mirrors `static/` (pages, stylesheet, and the wasm-pack output in
// `static/pkg` once built) into `dist/` for deployment.
use std::path::Path;

use fs_extra::dir::{copy, CopyOptions};

fn main() {
    println!("cargo:rerun-if-changed=static");

    let static_dir = Path::new("static");
    if !static_dir.exists() {
        return;
    }

    let out_dir = Path::new("dist");
    if out_dir.exists() {
        if let Err(e) = fs_extra::remove_items(&[out_dir]) {
            println!("cargo:warning=could not clear dist/: {e}");
        }
    }

    if let Err(e) = std::fs::create_dir_all(out_dir) {
        println!("cargo:warning=could not create dist/: {e}");
        return;
    }

    let options = CopyOptions::new().overwrite(true).content_only(true);
    if let Err(e) = copy(static_dir, out_dir, &options) {
        println!("cargo:warning=could not copy static/ to dist/: {e}");
    }
}
