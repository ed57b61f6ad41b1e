//! Browser entry point for the CSR build.

#[cfg(feature = "csr")]
fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("transfer rumours client starting");

    leptos::mount::mount_to_body(transfer_rumours::app::App);
}

#[cfg(not(feature = "csr"))]
fn main() {
    // The binary is only meaningful compiled to WASM with the `csr` feature.
}
