pub use super::value_objects::{ChangePercent, Price};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Domain entity - one row of the stock listing.
///
/// Ephemeral: lives for a single render cycle, identified only by `symbol`.
/// `prev_close` is not always present on older backend builds, hence the
/// default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockSummary {
    pub symbol: String,
    pub ltp: Price,
    #[serde(default)]
    pub prev_close: Option<Price>,
    pub change: ChangePercent,
    pub all_time_high: Price,
    pub all_time_low: Price,
    pub high_date: String,
}

impl StockSummary {
    pub fn is_gainer(&self) -> bool {
        self.change.is_gain()
    }
}

/// Domain entity - combined gainers/losers payload, wire order preserved.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TopStocks {
    pub gainers: Vec<StockSummary>,
    pub losers: Vec<StockSummary>,
}

/// Wire shape of `/sector-data`: either a sector map or a market-closed
/// marker when no trading volume exists for the day.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SectorDataResponse {
    Closed { market_closed: bool },
    Volumes(BTreeMap<String, f64>),
}

/// Domain entity - sector name mapped to traded volume.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SectorBreakdown {
    volumes: BTreeMap<String, f64>,
    market_closed: bool,
}

impl SectorBreakdown {
    pub fn market_closed() -> Self {
        Self {
            volumes: BTreeMap::new(),
            market_closed: true,
        }
    }

    pub fn is_market_closed(&self) -> bool {
        self.market_closed
    }

    pub fn sectors(&self) -> impl Iterator<Item = (&str, f64)> {
        self.volumes.iter().map(|(name, value)| (name.as_str(), *value))
    }

    pub fn total(&self) -> f64 {
        self.volumes.values().sum()
    }

    pub fn count(&self) -> usize {
        self.volumes.len()
    }

    /// A zero-volume map is as unrenderable as a closed market.
    pub fn has_slices(&self) -> bool {
        !self.market_closed && self.total() > 0.0
    }
}

impl From<BTreeMap<String, f64>> for SectorBreakdown {
    fn from(volumes: BTreeMap<String, f64>) -> Self {
        Self {
            volumes,
            market_closed: false,
        }
    }
}

impl From<SectorDataResponse> for SectorBreakdown {
    fn from(response: SectorDataResponse) -> Self {
        match response {
            SectorDataResponse::Closed { .. } => Self::market_closed(),
            SectorDataResponse::Volumes(volumes) => Self::from(volumes),
        }
    }
}
