use std::env;

/// Where the analysis service listens unless `OHD_API_BASE_URL` says otherwise.
const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

fn main() {
    // Bake the analysis service address into the WASM binary; the browser
    // has no environment to read it from at runtime.
    let base_url = env::var("OHD_API_BASE_URL")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

    println!("cargo:rustc-env=OHD_API_BASE_URL={}", base_url.trim());
    println!("cargo:rerun-if-env-changed=OHD_API_BASE_URL");
    println!("cargo:rerun-if-changed=build.rs");
}
