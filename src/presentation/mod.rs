pub mod progress;
pub mod wasm_api;
