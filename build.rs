fn main() {
    // Expose the build time so the startup banner can report it
    let timestamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string();
    println!("cargo:rustc-env=BUILD_TIMESTAMP={}", timestamp);

    println!("cargo:rerun-if-changed=src/");
    println!("cargo:rerun-if-changed=web/");
    println!("cargo:rerun-if-changed=build.rs");
}
