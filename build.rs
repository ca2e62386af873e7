use chrono::Datelike;

fn main() {
    // Capture the build year for the footer copyright line
    let year = chrono::Utc::now().year();

    // Also set as environment variable for use in env! macro
    println!("cargo:rustc-env=BUILD_YEAR={}", year);

    // Rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
