use serde::{Deserialize, Serialize};

pub const PH_MIN: f64 = 1.0;
pub const PH_MAX: f64 = 14.0;

/// Soil test results for a single request. Nutrients are in kg/ha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SoilSample {
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    pub ph: f64,
    pub organic_carbon: f64,
    pub moisture: f64,
}

impl Default for SoilSample {
    fn default() -> Self {
        Self {
            nitrogen: 0.0,
            phosphorus: 0.0,
            potassium: 0.0,
            ph: 7.0,
            organic_carbon: 0.0,
            moisture: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoilType {
    Alluvial,
    Black,
    Red,
    Laterite,
    Sandy,
}

impl SoilType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SoilType::Alluvial => "Alluvial",
            SoilType::Black => "Black (Regur)",
            SoilType::Red => "Red",
            SoilType::Laterite => "Laterite",
            SoilType::Sandy => "Sandy",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "alluvial" => Some(SoilType::Alluvial),
            "black" | "regur" | "black (regur)" => Some(SoilType::Black),
            "red" => Some(SoilType::Red),
            "laterite" => Some(SoilType::Laterite),
            "sandy" => Some(SoilType::Sandy),
            _ => None,
        }
    }
}

impl std::fmt::Display for SoilType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
