use derive_more::{Constructor, Deref, DerefMut, From, Into};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use strum::{AsRefStr, Display as StrumDisplay, EnumString};

/// Value Object - Last traded price (and other rupee amounts)
#[derive(
    Debug, Clone, Copy, PartialEq, From, Into, Deref, DerefMut, Constructor, Serialize, Deserialize,
)]
pub struct Price(f64);

impl Price {
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl PartialOrd for Price {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

/// Value Object - Day-over-day change, percent
#[derive(
    Debug, Clone, Copy, PartialEq, From, Into, Deref, DerefMut, Constructor, Serialize, Deserialize,
)]
pub struct ChangePercent(f64);

impl ChangePercent {
    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_gain(&self) -> bool {
        self.0 > 0.0
    }
}

/// Value Object - Month filter as read from the date input, "YYYY-MM".
///
/// Deliberately unvalidated: the backend owns the format and falls back to
/// its own default for anything it does not understand.
#[derive(Debug, Clone, PartialEq, Eq, Deref, From, Serialize, Deserialize)]
pub struct Month(String);

impl Month {
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Month {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Value Object - Stock listing categories the backend serves
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    StrumDisplay,
    EnumString,
    AsRefStr,
    Serialize,
    Deserialize,
)]
pub enum StockCategory {
    #[strum(serialize = "all")]
    #[serde(rename = "all")]
    All,

    #[strum(serialize = "nifty50")]
    #[serde(rename = "nifty50")]
    Nifty50,

    #[strum(serialize = "nifty500")]
    #[serde(rename = "nifty500")]
    Nifty500,

    #[strum(serialize = "niftybank")]
    #[serde(rename = "niftybank")]
    NiftyBank,

    #[strum(serialize = "niftyit")]
    #[serde(rename = "niftyit")]
    NiftyIt,

    #[strum(serialize = "niftynext50")]
    #[serde(rename = "niftynext50")]
    NiftyNext50,
}

impl StockCategory {
    pub fn as_query_value(&self) -> &str {
        self.as_ref()
    }
}
