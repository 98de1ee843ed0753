//! Browser-side checks of the DOM rendering edge against the element-id
//! contract of the surrounding page.

use stock_dashboard_wasm::application::DashboardService;
use stock_dashboard_wasm::domain::stocks::{ChangePercent, Price, StockSummary};
use stock_dashboard_wasm::infrastructure::{dom, http::DashboardHttpClient};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, HtmlButtonElement, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn summary(symbol: &str, ltp: f64, change: f64) -> StockSummary {
    StockSummary {
        symbol: symbol.to_string(),
        ltp: Price::from(ltp),
        prev_close: None,
        change: ChangePercent::from(change),
        all_time_high: Price::from(ltp + 10.0),
        all_time_low: Price::from(ltp - 10.0),
        high_date: "2024-03".to_string(),
    }
}

fn mount_dashboard_page() -> Document {
    let document = web_sys::window().unwrap().document().unwrap();
    document.body().unwrap().set_inner_html(
        r#"
        <div id="web-loading"><div id="progress-bar"></div></div>
        <div id="loading" style="display: none">Loading...</div>
        <input id="monthInput" type="month" value="2024-05">
        <button id="searchButton">Search</button>
        <table id="stocksTable"></table>
        <div id="ath-stocks"></div>
        <div id="top-gainers"></div>
        <div id="top-losers"></div>
        <canvas id="sector-chart"></canvas>
        "#,
    );
    document
}

#[wasm_bindgen_test]
fn empty_result_renders_single_placeholder_row() {
    let document = mount_dashboard_page();
    dom::render_search_table(&[]).unwrap();

    let table = document.get_element_by_id(dom::ids::STOCKS_TABLE).unwrap();
    // Header row plus exactly one placeholder row
    assert_eq!(table.get_elements_by_tag_name("tr").length(), 2);

    let cell = table.query_selector("td.no-stocks").unwrap().unwrap();
    assert_eq!(cell.get_attribute("colspan").as_deref(), Some("5"));
    assert_eq!(cell.text_content().as_deref(), Some("No stocks found"));
}

#[wasm_bindgen_test]
fn rebuild_keeps_one_listener_per_row() {
    let document = mount_dashboard_page();

    let three = vec![
        summary("TCS", 3890.5, 1.25),
        summary("INFY", 1520.5, 2.1),
        summary("WIPRO", 410.0, -1.6),
    ];
    dom::render_search_table(&three).unwrap();
    assert_eq!(dom::row_listener_count(), 3);

    dom::render_search_table(&three[..2]).unwrap();
    assert_eq!(dom::row_listener_count(), 2);

    let table = document.get_element_by_id(dom::ids::STOCKS_TABLE).unwrap();
    assert_eq!(table.get_elements_by_tag_name("tr").length(), 3);
}

#[wasm_bindgen_test]
fn mover_panels_render_one_div_per_badge_in_order() {
    let document = mount_dashboard_page();

    dom::render_mover_badges(
        dom::ids::TOP_GAINERS,
        "stock-up",
        &["📈 INFY: ₹1520.5 (2.1%)".to_string()],
    )
    .unwrap();
    dom::render_mover_badges(
        dom::ids::TOP_LOSERS,
        "stock-down",
        &[
            "📉 WIPRO: ₹410 (-1.6%)".to_string(),
            "📉 SBIN: ₹830 (-0.5%)".to_string(),
        ],
    )
    .unwrap();

    let gainers = document.get_element_by_id(dom::ids::TOP_GAINERS).unwrap().children();
    assert_eq!(gainers.length(), 1);
    let badge = gainers.item(0).unwrap();
    assert_eq!(badge.class_name(), "stock-up");
    assert_eq!(badge.text_content().as_deref(), Some("📈 INFY: ₹1520.5 (2.1%)"));

    let losers = document.get_element_by_id(dom::ids::TOP_LOSERS).unwrap().children();
    assert_eq!(losers.length(), 2);
    assert_eq!(losers.item(0).unwrap().class_name(), "stock-down");
    assert_eq!(
        losers.item(0).unwrap().text_content().as_deref(),
        Some("📉 WIPRO: ₹410 (-1.6%)")
    );
    assert_eq!(
        losers.item(1).unwrap().text_content().as_deref(),
        Some("📉 SBIN: ₹830 (-0.5%)")
    );
}

#[wasm_bindgen_test]
fn ath_strip_renders_spaced_span_badges() {
    let document = mount_dashboard_page();
    let stocks = vec![summary("TCS", 3890.5, 1.25), summary("INFY", 1520.5, 2.1)];
    dom::render_ath_strip(&stocks).unwrap();

    let container = document.get_element_by_id(dom::ids::ATH_STOCKS).unwrap();
    let badges = container.children();
    assert_eq!(badges.length(), 2);
    assert_eq!(badges.item(0).unwrap().class_name(), "ath-stock");
    assert_eq!(
        container.text_content().as_deref(),
        Some("🚀 TCS: ₹3890.5 (1.25%) 🚀 INFY: ₹1520.5 (2.1%)")
    );
}

#[wasm_bindgen_test]
async fn failed_search_leaves_table_and_restores_controls() {
    let document = mount_dashboard_page();

    // Table contents from an earlier successful search
    dom::render_search_table(&[summary("INFY", 1520.5, 2.1)]).unwrap();
    let table = document.get_element_by_id(dom::ids::STOCKS_TABLE).unwrap();
    let before = table.inner_html();

    // Nothing listens on the discard port, so the fetch fails
    let service = DashboardService::with_client(DashboardHttpClient::with_base_url(
        "http://127.0.0.1:9".to_string(),
    ));
    service.run_search("nifty50").await;

    assert_eq!(table.inner_html(), before);

    let loading: HtmlElement = document
        .get_element_by_id(dom::ids::LOADING)
        .unwrap()
        .dyn_into()
        .unwrap();
    assert_eq!(loading.style().get_property_value("display").unwrap(), "none");

    let button: HtmlButtonElement = document
        .get_element_by_id(dom::ids::SEARCH_BUTTON)
        .unwrap()
        .dyn_into()
        .unwrap();
    assert!(!button.disabled());
}
