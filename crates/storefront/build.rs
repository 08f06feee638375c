//! Build script for the WorkForge storefront.
//!
//! Fingerprints the marketplace stylesheet so the layout can link
//! `/static/css/derived/main.<hash>.css`, which the security headers
//! middleware serves as immutable.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

/// Stylesheet source, relative to the crate root.
const STYLESHEET: &str = "static/css/main.css";
/// Output directory for fingerprinted copies, relative to the crate root.
const DERIVED_DIR: &str = "static/css/derived";
/// Hex digits of the SHA-256 kept in the file name.
const HASH_LEN: usize = 8;

fn main() {
    let manifest_dir = PathBuf::from(
        env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR must be set by Cargo"),
    );
    fingerprint_stylesheet(&manifest_dir);
}

/// Copy the stylesheet to `DERIVED_DIR` under a content-hashed name.
///
/// Exposes the hash as `CSS_HASH` for the `css_hash` template filter. A
/// missing stylesheet yields an empty hash.
fn fingerprint_stylesheet(manifest_dir: &Path) {
    let source = manifest_dir.join(STYLESHEET);
    println!("cargo:rerun-if-changed={}", source.display());

    let css = match fs::read(&source) {
        Ok(css) => css,
        Err(e) => {
            println!("cargo:warning=stylesheet {} unreadable: {e}", source.display());
            println!("cargo:rustc-env=CSS_HASH=");
            return;
        }
    };

    let digest = format!("{:x}", Sha256::digest(&css));
    let hash = digest.get(..HASH_LEN).unwrap_or(&digest);
    println!("cargo:rustc-env=CSS_HASH={hash}");

    let derived = manifest_dir.join(DERIVED_DIR);
    fs::create_dir_all(&derived).expect("create derived stylesheet directory");
    fs::copy(&source, derived.join(format!("main.{hash}.css")))
        .expect("write fingerprinted stylesheet");
}
