use log::info;

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(site_interactions::config::log_level())
        .expect("error initializing log");

    info!("Starting page interactions");
    site_interactions::start();
}
