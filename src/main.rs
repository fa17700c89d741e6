//! CSR entry point: install the panic hook and console logger, then
//! mount the application to `<body>`.

fn main() {
    #[cfg(feature = "csr")]
    {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Debug);
        leptos::mount::mount_to_body(enroll_admin::app::App);
    }
}
