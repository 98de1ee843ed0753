//! Pure view-model builders for the dashboard panels.
//!
//! Everything here is plain data in, strings out - the DOM writes happen at
//! the infrastructure edge, so these stay testable without a browser.

use super::entities::StockSummary;

/// Header cells of the search results table, in column order.
pub const SEARCH_TABLE_HEADERS: [&str; 5] =
    ["Symbol", "LTP", "All Time High", "All Time Low", "ATH Date"];

/// Placeholder row text for an empty search result.
pub const NO_STOCKS_MESSAGE: &str = "No stocks found";

/// Title drawn above the sector pie.
pub const SECTOR_CHART_TITLE: &str = "📊 Sector-wise Stock Distribution";

/// Message drawn instead of the pie when the market is closed or no volume
/// was traded.
pub const MARKET_CLOSED_MESSAGE: &str = "Market closed - no sector data for today";

/// Badge for the all-time-high ticker strip: `🚀 SYMBOL: ₹LTP (CHANGE%)`.
pub fn ath_badge(stock: &StockSummary) -> String {
    format!(
        "🚀 {}: ₹{} ({}%)",
        stock.symbol,
        stock.ltp.value(),
        stock.change.value()
    )
}

/// Badge for a top gainer: `📈 SYMBOL: ₹LTP (CHANGE%)`.
pub fn gainer_badge(stock: &StockSummary) -> String {
    format!(
        "📈 {}: ₹{} ({}%)",
        stock.symbol,
        stock.ltp.value(),
        stock.change.value()
    )
}

/// Badge for a top loser: `📉 SYMBOL: ₹LTP (CHANGE%)`.
pub fn loser_badge(stock: &StockSummary) -> String {
    format!(
        "📉 {}: ₹{} ({}%)",
        stock.symbol,
        stock.ltp.value(),
        stock.change.value()
    )
}

/// All strip badges joined by single spaces, as rendered into `#ath-stocks`.
pub fn ath_strip_text(stocks: &[StockSummary]) -> String {
    stocks
        .iter()
        .map(ath_badge)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Cell texts of one search result row, matching `SEARCH_TABLE_HEADERS`.
pub fn search_row_cells(stock: &StockSummary) -> [String; 5] {
    [
        stock.symbol.clone(),
        stock.ltp.value().to_string(),
        stock.all_time_high.value().to_string(),
        stock.all_time_low.value().to_string(),
        stock.high_date.clone(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::stocks::value_objects::{ChangePercent, Price};

    fn summary(symbol: &str, ltp: f64, change: f64) -> StockSummary {
        StockSummary {
            symbol: symbol.to_string(),
            ltp: Price::from(ltp),
            prev_close: None,
            change: ChangePercent::from(change),
            all_time_high: Price::from(ltp * 1.5),
            all_time_low: Price::from(ltp * 0.5),
            high_date: "2023-09".to_string(),
        }
    }

    #[test]
    fn ath_badge_format() {
        let stock = summary("TCS", 3890.5, 1.25);
        assert_eq!(ath_badge(&stock), "🚀 TCS: ₹3890.5 (1.25%)");
    }

    #[test]
    fn gainer_and_loser_badges() {
        assert_eq!(
            gainer_badge(&summary("INFY", 1520.5, 2.1)),
            "📈 INFY: ₹1520.5 (2.1%)"
        );
        assert_eq!(
            loser_badge(&summary("WIPRO", 410.0, -1.6)),
            "📉 WIPRO: ₹410 (-1.6%)"
        );
    }

    #[test]
    fn strip_joins_with_single_spaces() {
        let stocks = vec![summary("TCS", 3890.5, 1.25), summary("INFY", 1520.5, 2.1)];
        assert_eq!(
            ath_strip_text(&stocks),
            "🚀 TCS: ₹3890.5 (1.25%) 🚀 INFY: ₹1520.5 (2.1%)"
        );
    }

    #[test]
    fn empty_strip_is_empty() {
        assert_eq!(ath_strip_text(&[]), "");
    }

    #[test]
    fn row_cells_match_fields_verbatim() {
        let stock = summary("HDFCBANK", 1600.0, -0.4);
        let cells = search_row_cells(&stock);
        assert_eq!(
            cells,
            [
                "HDFCBANK".to_string(),
                "1600".to_string(),
                "2400".to_string(),
                "800".to_string(),
                "2023-09".to_string(),
            ]
        );
    }
}
