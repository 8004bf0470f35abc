use std::env;
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Directory holding the gateware's `csr.rs`, `mem.rs` and `rust-cfg`.
///
/// A gateware build exports `BUILDINC_DIRECTORY`; without it the maps
/// checked in under `fallback` (relative to the crate root) are used.
pub fn generated_dir(fallback: &str) -> PathBuf {
    println!("cargo:rerun-if-env-changed=BUILDINC_DIRECTORY");
    match env::var("BUILDINC_DIRECTORY") {
        Ok(dir) => Path::new(&dir).join("generated"),
        Err(_) => {
            let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
            Path::new(&manifest_dir).join(fallback)
        }
    }
}

pub fn cfg(generated: &Path) {
    let cfg_path = generated.join("rust-cfg");
    println!("cargo:rerun-if-changed={}", cfg_path.to_str().unwrap());

    let f = BufReader::new(File::open(&cfg_path).unwrap());
    for line in f.lines() {
        let line = line.unwrap();
        if !line.trim().is_empty() {
            println!("cargo:rustc-cfg={}", line.trim());
        }
    }
}

/// Copies the generated sources into `OUT_DIR/generated` so that the crate
/// can `include!` them from one place.
pub fn stage(generated: &Path, files: &[&str]) {
    let out_dir = env::var("OUT_DIR").unwrap();
    let staged = Path::new(&out_dir).join("generated");
    fs::create_dir_all(&staged).unwrap();
    for file in files {
        let src = generated.join(file);
        println!("cargo:rerun-if-changed={}", src.to_str().unwrap());
        fs::copy(&src, staged.join(file)).unwrap();
    }
}
