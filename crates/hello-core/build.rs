use std::process::Command;

fn main() {
    let rustc = std::env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());

    let version = Command::new(rustc)
        .arg("--version")
        .output()
        .ok()
        .filter(|output| output.status.success())
        .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string());

    if let Some(version) = version {
        println!("cargo:rustc-env=HELLO_RUSTC_VERSION={}", version);
    }

    println!("cargo:rerun-if-env-changed=RUSTC");
}
