// File: crates/timings-core/tests/common/mod.rs
// Purpose: Shared fixtures for integration tests (results files written to a temp dir).

#![allow(dead_code)]

use std::io::Write;
use std::path::PathBuf;

use tempfile::TempDir;

/// Rows of the Automate/KMP scenario, headerless.
pub const TWO_WORDS: &str = "alpha,1.2,1,3.4,0\nbeta,5.6,0,2.1,1\n";

/// Same rows with a header and an egrep column.
pub const TWO_WORDS_EGREP: &str = "\
word,AutomateTime,isThereAWordAutomate,KMPTime,isThereAWordKMP,egrepTime
alpha,1.2,1,3.4,0,0.9
beta,5.6,0,2.1,1,1.1
";

/// Write `contents` to `results.csv` inside a fresh temp dir (kept alive by the returned guard).
pub fn results_file(contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("results.csv");
    let mut f = std::fs::File::create(&path).expect("create results.csv");
    f.write_all(contents.as_bytes()).expect("write results.csv");
    (dir, path)
}
