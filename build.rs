use chrono::Datelike;

fn main() {
    // Stamp the build year so server render and hydration print the same copyright
    let build_year = chrono::Utc::now().year();

    println!("cargo:rustc-env=BUILD_YEAR={}", build_year);

    // Rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
