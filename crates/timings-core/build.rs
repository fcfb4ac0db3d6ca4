// File: crates/timings-core/build.rs
// Summary: Links the Windows system libraries Skia's font manager and ICU need.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW / RegQueryInfoKeyW used by the system font lookup
        println!("cargo:rustc-link-lib=advapi32");
    }
}
