//! Resolves the public build-time variables and hands them to the compiler so
//! the server-rendered HTML and the hydrated WASM bundle see the same values.

#[allow(dead_code)]
#[path = "src/public_env.rs"]
mod public_env;

fn main() {
    // Same `.env` the server reads; real environment variables take precedence.
    let dotenv = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../.env");
    if dotenv.exists() {
        println!("cargo:rerun-if-changed={}", dotenv.display());
        let _ = dotenvy::from_path(&dotenv);
    }

    for var in public_env::BUILD_VARS {
        println!("cargo:rerun-if-env-changed={var}");
    }
    println!("cargo:rerun-if-changed=src/public_env.rs");

    let debug_build = std::env::var("PROFILE").map_or(true, |profile| profile == "debug");
    for (key, value) in public_env::resolve_build_vars(|key| std::env::var(key).ok(), debug_build) {
        println!("cargo:rustc-env={key}={value}");
    }
}
