use log::{info, Level};

use ngodingin::app::App;
use ngodingin::config::get_site_url;

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application on {}", get_site_url());
    yew::Renderer::<App>::new().render();
}
