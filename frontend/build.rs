//! Bakes deployment settings into the wasm bundle. Values come from the
//! process environment or, failing that, a `.env` file next to this crate.

const FORWARDED: &[&str] = &["ARABA_API_BASE", "ARABA_REQUEST_TIMEOUT_MS"];

fn main() {
    println!("cargo:rerun-if-changed=.env");
    dotenvy::dotenv().ok();

    for key in FORWARDED {
        println!("cargo:rerun-if-env-changed={key}");
        if let Ok(value) = std::env::var(key) {
            println!("cargo:rustc-env={key}={value}");
        }
    }
}
