//! WASM API exposed to the page - the bridge to the application layer.
//!
//! The exported names match the inline handlers the dashboard templates
//! already use (`fetchStocks('nifty50')`, `gotoStockDetails(symbol)`, ...).

use js_sys::Promise;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

use crate::application::DashboardService;
use crate::domain::logging::LogComponent;
use crate::infrastructure::dom;
use crate::log_warn;

/// Search the given category for the month in `#monthInput` and rebuild the
/// results table.
#[wasm_bindgen(js_name = fetchStocks)]
pub fn fetch_stocks(category: String) -> Promise {
    future_to_promise(async move {
        DashboardService::new().run_search(&category).await;
        Ok(JsValue::UNDEFINED)
    })
}

/// Full-page navigation to the details page of a symbol.
#[wasm_bindgen(js_name = gotoStockDetails)]
pub fn goto_stock_details(symbol: String) {
    dom::navigate_to_details(&symbol);
}

/// Show the generic loading label.
#[wasm_bindgen(js_name = showLoading)]
pub fn show_loading() {
    if let Err(e) = dom::show_loading_label() {
        log_warn!(LogComponent::Presentation("Api"), "showLoading failed: {}", e);
    }
}

/// Hide the generic loading label.
#[wasm_bindgen(js_name = hideLoading)]
pub fn hide_loading() {
    if let Err(e) = dom::hide_loading_label() {
        log_warn!(LogComponent::Presentation("Api"), "hideLoading failed: {}", e);
    }
}
