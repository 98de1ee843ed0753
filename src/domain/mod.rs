pub mod errors;
pub mod logging;
pub mod progress;
pub mod stocks;
