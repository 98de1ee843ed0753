//! DOM edge of the dashboard: every write to the page goes through here.
//!
//! Rendering always builds nodes and assigns `set_text_content`, never
//! interpolated innerHTML, so server-provided fields cannot inject markup.

use crate::domain::{
    errors::{DashboardError, FetchResult},
    logging::{LogComponent, get_logger},
    stocks::StockSummary,
    stocks::services::{NO_STOCKS_MESSAGE, SEARCH_TABLE_HEADERS, ath_badge, search_row_cells},
};
use crate::infrastructure::http::HttpUtils;
use gloo::events::EventListener;
use std::cell::RefCell;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlButtonElement, HtmlElement, HtmlInputElement};

/// Element IDs this crate binds to - the contract with the surrounding page.
pub mod ids {
    pub const PROGRESS_BAR: &str = "progress-bar";
    pub const WEB_LOADING: &str = "web-loading";
    pub const LOADING: &str = "loading";
    pub const SEARCH_BUTTON: &str = "searchButton";
    pub const MONTH_INPUT: &str = "monthInput";
    pub const STOCKS_TABLE: &str = "stocksTable";
    pub const ATH_STOCKS: &str = "ath-stocks";
    pub const TOP_GAINERS: &str = "top-gainers";
    pub const TOP_LOSERS: &str = "top-losers";
    pub const SECTOR_CHART: &str = "sector-chart";
}

thread_local! {
    /// Click listeners of the current table render. Cleared on every
    /// rebuild so handlers from the previous render are dropped with it.
    static ROW_LISTENERS: RefCell<Vec<EventListener>> = const { RefCell::new(Vec::new()) };
}

/// Number of live row click listeners, one per data row of the last render.
pub fn row_listener_count() -> usize {
    ROW_LISTENERS.with(|listeners| listeners.borrow().len())
}

fn js_err(context: &str, value: JsValue) -> DashboardError {
    DashboardError::Dom(format!("{}: {:?}", context, value))
}

pub fn document() -> FetchResult<Document> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| DashboardError::Dom("Document not available".to_string()))
}

pub fn element_by_id(document: &Document, id: &str) -> FetchResult<Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| DashboardError::Dom(format!("Element '{}' not found in DOM", id)))
}

fn html_element_by_id(document: &Document, id: &str) -> FetchResult<HtmlElement> {
    element_by_id(document, id)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| DashboardError::Dom(format!("Element '{}' is not an HtmlElement", id)))
}

fn set_display(id: &str, display: &str) -> FetchResult<()> {
    let document = document()?;
    let element = html_element_by_id(&document, id)?;
    element
        .style()
        .set_property("display", display)
        .map_err(|e| js_err("Failed to set display", e))
}

/// Show the generic loading label.
pub fn show_loading_label() -> FetchResult<()> {
    set_display(ids::LOADING, "block")
}

/// Hide the generic loading label.
pub fn hide_loading_label() -> FetchResult<()> {
    set_display(ids::LOADING, "none")
}

/// Hide the full-page startup overlay. Idempotent - the progress interval
/// and the safety timeout may both get here.
pub fn hide_startup_overlay() -> FetchResult<()> {
    set_display(ids::WEB_LOADING, "none")
}

/// Write the current percentage onto the progress bar, as width and label.
pub fn set_progress_bar(label: &str) -> FetchResult<()> {
    let document = document()?;
    let bar = html_element_by_id(&document, ids::PROGRESS_BAR)?;
    bar.style()
        .set_property("width", label)
        .map_err(|e| js_err("Failed to set progress width", e))?;
    bar.set_inner_text(label);
    Ok(())
}

/// Enable or disable the search button.
pub fn set_search_button_disabled(disabled: bool) -> FetchResult<()> {
    let document = document()?;
    let button = element_by_id(&document, ids::SEARCH_BUTTON)?
        .dyn_into::<HtmlButtonElement>()
        .map_err(|_| DashboardError::Dom("'searchButton' is not a button".to_string()))?;
    button.set_disabled(disabled);
    Ok(())
}

/// Read the month filter from the date input, "YYYY-MM", unvalidated.
pub fn month_input_value() -> FetchResult<String> {
    let document = document()?;
    let input = element_by_id(&document, ids::MONTH_INPUT)?
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| DashboardError::Dom("'monthInput' is not an input".to_string()))?;
    Ok(input.value())
}

/// Full-page navigation to the details page for a symbol.
pub fn navigate_to_details(symbol: &str) {
    let path = HttpUtils::stock_details_path(symbol);
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_href(&path) {
            get_logger().error(
                LogComponent::Infrastructure("Dom"),
                &format!("Navigation to {} failed: {:?}", path, e),
            );
        }
    }
}

/// Render the ATH ticker strip: one `span.ath-stock` badge per entry,
/// separated by single spaces.
pub fn render_ath_strip(stocks: &[StockSummary]) -> FetchResult<()> {
    let document = document()?;
    let container = element_by_id(&document, ids::ATH_STOCKS)?;
    container.set_inner_html("");

    for (i, stock) in stocks.iter().enumerate() {
        if i > 0 {
            container
                .append_child(&document.create_text_node(" "))
                .map_err(|e| js_err("Failed to append separator", e))?;
        }
        let badge = document
            .create_element("span")
            .map_err(|e| js_err("Failed to create badge", e))?;
        badge.set_class_name("ath-stock");
        badge.set_text_content(Some(&ath_badge(stock)));
        container
            .append_child(&badge)
            .map_err(|e| js_err("Failed to append badge", e))?;
    }

    Ok(())
}

/// Render one movers panel: a `div` badge per stock, wire order preserved.
pub fn render_mover_badges(
    container_id: &str,
    class_name: &str,
    badges: &[String],
) -> FetchResult<()> {
    let document = document()?;
    let container = element_by_id(&document, container_id)?;
    container.set_inner_html("");

    for text in badges {
        let badge = document
            .create_element("div")
            .map_err(|e| js_err("Failed to create badge", e))?;
        badge.set_class_name(class_name);
        badge.set_text_content(Some(text));
        container
            .append_child(&badge)
            .map_err(|e| js_err("Failed to append badge", e))?;
    }

    Ok(())
}

/// Rebuild the search results table: header row, then one clickable row per
/// stock, or a single colspan-5 placeholder when the result set is empty.
pub fn render_search_table(stocks: &[StockSummary]) -> FetchResult<()> {
    let document = document()?;
    let table = element_by_id(&document, ids::STOCKS_TABLE)?;
    table.set_inner_html("");
    ROW_LISTENERS.with(|listeners| listeners.borrow_mut().clear());

    let header = document
        .create_element("tr")
        .map_err(|e| js_err("Failed to create header row", e))?;
    for title in SEARCH_TABLE_HEADERS {
        let th = document
            .create_element("th")
            .map_err(|e| js_err("Failed to create header cell", e))?;
        th.set_text_content(Some(title));
        header
            .append_child(&th)
            .map_err(|e| js_err("Failed to append header cell", e))?;
    }
    table
        .append_child(&header)
        .map_err(|e| js_err("Failed to append header row", e))?;

    if stocks.is_empty() {
        let row = document
            .create_element("tr")
            .map_err(|e| js_err("Failed to create placeholder row", e))?;
        let cell = document
            .create_element("td")
            .map_err(|e| js_err("Failed to create placeholder cell", e))?;
        cell.set_attribute("colspan", "5")
            .map_err(|e| js_err("Failed to set colspan", e))?;
        cell.set_class_name("no-stocks");
        cell.set_text_content(Some(NO_STOCKS_MESSAGE));
        row.append_child(&cell)
            .map_err(|e| js_err("Failed to append placeholder cell", e))?;
        table
            .append_child(&row)
            .map_err(|e| js_err("Failed to append placeholder row", e))?;
        return Ok(());
    }

    for stock in stocks {
        let row = document
            .create_element("tr")
            .map_err(|e| js_err("Failed to create row", e))?;
        for text in search_row_cells(stock) {
            let td = document
                .create_element("td")
                .map_err(|e| js_err("Failed to create cell", e))?;
            td.set_text_content(Some(&text));
            row.append_child(&td)
                .map_err(|e| js_err("Failed to append cell", e))?;
        }

        let symbol = stock.symbol.clone();
        let on_click = EventListener::new(&row, "click", move |_| navigate_to_details(&symbol));
        ROW_LISTENERS.with(|listeners| listeners.borrow_mut().push(on_click));

        table
            .append_child(&row)
            .map_err(|e| js_err("Failed to append row", e))?;
    }

    Ok(())
}
