//! Compiles the bundled creature roster into a postcard blob so the library
//! can decode it without touching the filesystem at runtime.

use schema::CreatureTemplate;
use std::env;
use std::fs;
use std::path::Path;

fn main() {
    let roster_path = Path::new("data").join("creatures.ron");
    println!("cargo:rerun-if-changed={}", roster_path.display());

    let content = fs::read_to_string(&roster_path)
        .unwrap_or_else(|e| panic!("failed to read {}: {}", roster_path.display(), e));
    let roster: Vec<CreatureTemplate> = ron::from_str(&content)
        .unwrap_or_else(|e| panic!("failed to parse {}: {}", roster_path.display(), e));

    let bytes = postcard::to_allocvec(&roster).expect("roster should serialize");

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let dest = Path::new(&out_dir).join("creatures.bin");
    fs::write(&dest, bytes)
        .unwrap_or_else(|e| panic!("failed to write {}: {}", dest.display(), e));
}
