use crate::domain::{
    errors::{DashboardError, FetchResult},
    logging::{LogComponent, get_logger},
    stocks::{Month, SectorBreakdown, SectorDataResponse, StockSummary, TopStocks},
};
use gloo::net::http::Request;
use serde::Deserialize;
use std::collections::HashMap;
use web_sys::AbortSignal;

/// HTTP client for the dashboard backend endpoints.
///
/// All endpoints are same-origin GETs returning JSON; `base_url` stays empty
/// in production and points at a test server in integration setups.
#[derive(Clone, Default)]
pub struct DashboardHttpClient {
    base_url: String,
}

impl DashboardHttpClient {
    pub fn new() -> Self {
        Self {
            base_url: String::new(),
        }
    }

    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    /// `GET /stocks?category=..&date=..` - category listing, optionally
    /// filtered by month. An empty array is a valid response.
    pub async fn get_stocks(
        &self,
        category: &str,
        month: Option<&Month>,
        signal: Option<&AbortSignal>,
    ) -> FetchResult<Vec<StockSummary>> {
        let mut params = HashMap::new();
        params.insert("category".to_string(), category.to_string());
        if let Some(month) = month {
            params.insert("date".to_string(), month.value().to_string());
        }

        let url = HttpUtils::build_url_with_params(&format!("{}/stocks", self.base_url), &params);
        let stocks: Vec<StockSummary> = self.get_json(&url, signal).await?;

        get_logger().info(
            LogComponent::Infrastructure("DashboardHttpClient"),
            &format!("📡 Fetched {} stocks for category {}", stocks.len(), category),
        );

        Ok(stocks)
    }

    /// `GET /top-stocks` - combined gainers/losers payload.
    pub async fn get_top_stocks(&self) -> FetchResult<TopStocks> {
        let url = format!("{}/top-stocks", self.base_url);
        let top: TopStocks = self.get_json(&url, None).await?;

        get_logger().info(
            LogComponent::Infrastructure("DashboardHttpClient"),
            &format!(
                "📡 Fetched top stocks: {} gainers, {} losers",
                top.gainers.len(),
                top.losers.len()
            ),
        );

        Ok(top)
    }

    /// `GET /sector-data` - sector volume map, or a market-closed marker.
    pub async fn get_sector_data(&self) -> FetchResult<SectorBreakdown> {
        let url = format!("{}/sector-data", self.base_url);
        let response: SectorDataResponse = self.get_json(&url, None).await?;
        let breakdown = SectorBreakdown::from(response);

        get_logger().info(
            LogComponent::Infrastructure("DashboardHttpClient"),
            &format!(
                "📡 Fetched sector data: {} sectors (market closed: {})",
                breakdown.count(),
                breakdown.is_market_closed()
            ),
        );

        Ok(breakdown)
    }

    async fn get_json<T>(&self, url: &str, signal: Option<&AbortSignal>) -> FetchResult<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        get_logger().debug(
            LogComponent::Infrastructure("HTTP"),
            &format!("🌐 GET: {}", url),
        );

        let response = Request::get(url)
            .abort_signal(signal)
            .send()
            .await
            .map_err(|e| DashboardError::Network(format!("Failed to send request: {:?}", e)))?;

        if !response.ok() {
            return Err(DashboardError::Network(format!(
                "HTTP error: {} - {}",
                response.status(),
                response.status_text()
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| DashboardError::Parse(format!("Failed to parse JSON: {:?}", e)))
    }
}

/// HTTP request utilities
pub struct HttpUtils;

impl HttpUtils {
    /// Build a URL with query parameters
    pub fn build_url_with_params(base_url: &str, params: &HashMap<String, String>) -> String {
        if params.is_empty() {
            return base_url.to_string();
        }

        let query_string: String = params
            .iter()
            .map(|(key, value)| format!("{}={}", key, Self::url_encode(value)))
            .collect::<Vec<_>>()
            .join("&");

        format!("{}?{}", base_url, query_string)
    }

    /// Minimal percent-encoding for the characters that break query strings
    /// and path segments. `%` must go first.
    pub fn url_encode(input: &str) -> String {
        input
            .replace("%", "%25")
            .replace(" ", "%20")
            .replace("&", "%26")
            .replace("=", "%3D")
            .replace("?", "%3F")
            .replace("#", "%23")
            .replace("/", "%2F")
    }

    /// Navigation target of a clickable search row. The symbol is server
    /// data, so it is encoded before landing in the path.
    pub fn stock_details_path(symbol: &str) -> String {
        format!("/stock-details/{}", Self::url_encode(symbol))
    }
}
