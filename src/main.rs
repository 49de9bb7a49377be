//! Browser entry point: initializes logging and mounts the app.

#[cfg(feature = "csr")]
fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(station_manager::App);
}

#[cfg(not(feature = "csr"))]
fn main() {
    // The binary only does something in a browser build (`--features csr`).
}
