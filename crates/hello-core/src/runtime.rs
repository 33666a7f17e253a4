/// Version string the toolchain reported for itself when this crate was built
pub fn runtime_version() -> &'static str {
    option_env!("HELLO_RUSTC_VERSION").unwrap_or("unknown")
}
