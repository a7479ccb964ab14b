use super::fertilizer::{FertilizerPlan, IrrigationPlan};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CropCategory {
    Cereals,
    Pulses,
    Oilseeds,
    Cash,
    Vegetables,
    Fruits,
    Spices,
    General,
    Other,
}

impl CropCategory {
    pub fn all() -> &'static [CropCategory] {
        &[
            CropCategory::General,
            CropCategory::Cereals,
            CropCategory::Pulses,
            CropCategory::Oilseeds,
            CropCategory::Cash,
            CropCategory::Vegetables,
            CropCategory::Fruits,
            CropCategory::Spices,
            CropCategory::Other,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CropCategory::Cereals => "Cereals",
            CropCategory::Pulses => "Pulses",
            CropCategory::Oilseeds => "Oilseeds",
            CropCategory::Cash => "Cash Crops",
            CropCategory::Vegetables => "Vegetables",
            CropCategory::Fruits => "Fruits",
            CropCategory::Spices => "Spices",
            CropCategory::General => "General Recommendation",
            CropCategory::Other => "Other",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "cereals" | "cereal" => Some(CropCategory::Cereals),
            "pulses" | "pulse" => Some(CropCategory::Pulses),
            "oilseeds" | "oilseed" => Some(CropCategory::Oilseeds),
            "cash" | "cash crops" | "cashcrops" => Some(CropCategory::Cash),
            "vegetables" | "vegetable" => Some(CropCategory::Vegetables),
            "fruits" | "fruit" => Some(CropCategory::Fruits),
            "spices" | "spice" => Some(CropCategory::Spices),
            "general" | "general recommendation" => Some(CropCategory::General),
            "other" => Some(CropCategory::Other),
            _ => None,
        }
    }
}

impl std::fmt::Display for CropCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A validated category choice. `other` always carries a non-blank crop name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CropSelection {
    Category(CropCategory),
    Custom(String),
}

impl CropSelection {
    pub fn category(&self) -> CropCategory {
        match self {
            CropSelection::Category(category) => *category,
            CropSelection::Custom(_) => CropCategory::Other,
        }
    }
}

/// Three-tier rating shared by profitability and water requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
    Low,
    Medium,
    High,
}

impl Rating {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::Low => "low",
            Rating::Medium => "medium",
            Rating::High => "high",
        }
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropRecommendation {
    pub crop_name: String,
    pub confidence: u8,
    pub reasons: Vec<String>,
    /// kg/ha
    pub expected_yield: u32,
    pub profitability: Rating,
    pub water_requirement: Rating,
    pub seasonality: String,
    pub fertilizer: FertilizerPlan,
    pub irrigation: IrrigationPlan,
}

impl CropRecommendation {
    pub fn new(crop_name: impl Into<String>, confidence: u8) -> Self {
        Self {
            crop_name: crop_name.into(),
            confidence: confidence.min(100),
            reasons: Vec::new(),
            expected_yield: 0,
            profitability: Rating::Medium,
            water_requirement: Rating::Medium,
            seasonality: String::new(),
            fertilizer: FertilizerPlan::default(),
            irrigation: IrrigationPlan::default(),
        }
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reasons.push(reason.into());
        self
    }

    pub fn with_yield(mut self, kg_per_ha: u32) -> Self {
        self.expected_yield = kg_per_ha;
        self
    }

    pub fn with_ratings(mut self, profitability: Rating, water_requirement: Rating) -> Self {
        self.profitability = profitability;
        self.water_requirement = water_requirement;
        self
    }

    pub fn with_seasonality(mut self, seasonality: impl Into<String>) -> Self {
        self.seasonality = seasonality.into();
        self
    }

    pub fn with_plans(mut self, fertilizer: FertilizerPlan, irrigation: IrrigationPlan) -> Self {
        self.fertilizer = fertilizer;
        self.irrigation = irrigation;
        self
    }

    /// True when every list the presentation layer renders is populated.
    pub fn is_complete(&self) -> bool {
        !self.reasons.is_empty()
            && self.expected_yield > 0
            && !self.fertilizer.schedule.is_empty()
            && !self.irrigation.seasons.is_empty()
    }
}
