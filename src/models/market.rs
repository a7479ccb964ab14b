use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceTrend {
    Up,
    Down,
    #[default]
    Stable,
}

impl PriceTrend {
    /// The trend is always the sign of the delta, never supplied independently.
    pub fn from_delta(delta: i64) -> Self {
        match delta.signum() {
            1 => PriceTrend::Up,
            -1 => PriceTrend::Down,
            _ => PriceTrend::Stable,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PriceTrend::Up => "↑ up",
            PriceTrend::Down => "↓ down",
            PriceTrend::Stable => "→ stable",
        }
    }
}

impl std::fmt::Display for PriceTrend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A mandi quotation. Prices are integers in the quote's unit (e.g. ₹/quintal).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketQuote {
    pub crop_name: String,
    pub current_price: i64,
    pub previous_price: i64,
    pub market_location: String,
    pub min_price: i64,
    pub max_price: i64,
    pub unit: String,
}

impl MarketQuote {
    pub fn new(crop_name: impl Into<String>, current_price: i64, previous_price: i64) -> Self {
        Self {
            crop_name: crop_name.into(),
            current_price,
            previous_price,
            market_location: String::new(),
            min_price: current_price.min(previous_price),
            max_price: current_price.max(previous_price),
            unit: "₹/quintal".to_string(),
        }
    }

    pub fn at(mut self, market_location: impl Into<String>) -> Self {
        self.market_location = market_location.into();
        self
    }

    pub fn with_range(mut self, min_price: i64, max_price: i64) -> Self {
        self.min_price = min_price;
        self.max_price = max_price;
        self
    }
}

/// Non-fatal warning: the current price sits outside the quoted band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeViolation {
    pub price: i64,
    pub min_price: i64,
    pub max_price: i64,
}

impl std::fmt::Display for RangeViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "price {} outside quoted range {}-{}",
            self.price, self.min_price, self.max_price
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendAnalysis {
    pub crop_name: String,
    pub delta: i64,
    pub percentage: f64,
    pub trend: PriceTrend,
    /// Where the current price sits in the min/max band, 0-100.
    pub range_position: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range_violation: Option<RangeViolation>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketSummary {
    pub total: usize,
    pub rising: usize,
    pub falling: usize,
    pub stable: usize,
}
