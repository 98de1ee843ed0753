use wasm_bindgen::prelude::*;

use crate::domain::logging::{LogComponent, get_logger};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

/// Initialize the dashboard client: logging, startup progress indicator,
/// and the three load-time panels (fired concurrently, fire-and-forget).
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    // Initialize logger with infrastructure implementation
    let console_logger = Box::new(infrastructure::services::ConsoleLogger::new_development());
    domain::logging::init_logger(console_logger);

    // Initialize time provider with browser implementation
    let browser_time_provider = Box::new(infrastructure::services::BrowserTimeProvider::new());
    domain::logging::init_time_provider(browser_time_provider);

    get_logger().info(
        LogComponent::Presentation("Initialize"),
        "🚀 Dashboard client initialized",
    );

    presentation::progress::start_progress_indicator();
    application::bootstrap_panels();
}
