use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrowthStage {
    Planting,
    Vegetative,
    Flowering,
    Fruiting,
    Maturity,
}

impl GrowthStage {
    pub fn all() -> &'static [GrowthStage] {
        &[
            GrowthStage::Planting,
            GrowthStage::Vegetative,
            GrowthStage::Flowering,
            GrowthStage::Fruiting,
            GrowthStage::Maturity,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GrowthStage::Planting => "Planting/Sowing",
            GrowthStage::Vegetative => "Vegetative Growth",
            GrowthStage::Flowering => "Flowering",
            GrowthStage::Fruiting => "Fruiting/Grain Formation",
            GrowthStage::Maturity => "Maturity",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "planting" | "sowing" | "transplanting" => Some(GrowthStage::Planting),
            "vegetative" | "tillering" => Some(GrowthStage::Vegetative),
            "flowering" => Some(GrowthStage::Flowering),
            "fruiting" | "grain formation" => Some(GrowthStage::Fruiting),
            "maturity" => Some(GrowthStage::Maturity),
            _ => None,
        }
    }
}

impl std::fmt::Display for GrowthStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-hectare NPK doses with an ordered application schedule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FertilizerPlan {
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    pub schedule: Vec<String>,
}

impl FertilizerPlan {
    pub fn new(nitrogen: f64, phosphorus: f64, potassium: f64) -> Self {
        Self {
            nitrogen,
            phosphorus,
            potassium,
            schedule: Vec::new(),
        }
    }

    pub fn with_step(mut self, step: impl Into<String>) -> Self {
        self.schedule.push(step.into());
        self
    }

    /// Nutrient mass for the whole field. Per-hectare figures stay untouched.
    pub fn total_for(&self, land_area_ha: f64) -> NutrientTotals {
        NutrientTotals {
            land_area_ha,
            nitrogen_kg: round_to_tenth(self.nitrogen * land_area_ha),
            phosphorus_kg: round_to_tenth(self.phosphorus * land_area_ha),
            potassium_kg: round_to_tenth(self.potassium * land_area_ha),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutrientTotals {
    pub land_area_ha: f64,
    pub nitrogen_kg: f64,
    pub phosphorus_kg: f64,
    pub potassium_kg: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IrrigationPlan {
    pub frequency: String,
    pub amount: String,
    pub seasons: Vec<String>,
}

impl IrrigationPlan {
    pub fn new(frequency: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            frequency: frequency.into(),
            amount: amount.into(),
            seasons: Vec::new(),
        }
    }

    pub fn with_season(mut self, season: impl Into<String>) -> Self {
        self.seasons.push(season.into());
        self
    }
}

/// One watering step to follow a fertilizer application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FollowUpIrrigation {
    pub stage: String,
    pub timing: String,
    pub amount: String,
    pub purpose: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganicAlternative {
    pub name: String,
    pub npk: String,
    pub application: String,
    pub benefits: String,
}

pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn growth_stage_from_str_valid() {
        assert_eq!(GrowthStage::from_str("planting"), Some(GrowthStage::Planting));
        assert_eq!(GrowthStage::from_str("Sowing"), Some(GrowthStage::Planting));
        assert_eq!(GrowthStage::from_str("FLOWERING"), Some(GrowthStage::Flowering));
        assert_eq!(GrowthStage::from_str("maturity"), Some(GrowthStage::Maturity));
    }

    #[test]
    fn growth_stage_from_str_invalid() {
        assert_eq!(GrowthStage::from_str("harvest"), None);
        assert_eq!(GrowthStage::from_str(""), None);
    }

    #[test]
    fn growth_stage_round_trip() {
        for stage in GrowthStage::all() {
            let debug_str = format!("{:?}", stage);
            assert_eq!(GrowthStage::from_str(&debug_str), Some(*stage));
        }
    }

    #[test]
    fn totals_scale_by_area() {
        let plan = FertilizerPlan::new(60.0, 30.0, 20.0);
        let totals = plan.total_for(2.0);
        assert_eq!(totals.nitrogen_kg, 120.0);
        assert_eq!(totals.phosphorus_kg, 60.0);
        assert_eq!(totals.potassium_kg, 40.0);
        // Per-hectare figures are not rewritten
        assert_eq!(plan.nitrogen, 60.0);
    }

    #[test]
    fn totals_round_to_one_decimal() {
        let plan = FertilizerPlan::new(40.0, 0.0, 20.0);
        let totals = plan.total_for(0.333);
        assert_eq!(totals.nitrogen_kg, 13.3);
        assert_eq!(totals.phosphorus_kg, 0.0);
        assert_eq!(totals.potassium_kg, 6.7);
    }

    #[test]
    fn round_to_tenth_known_values() {
        assert_eq!(round_to_tenth(4.779), 4.8);
        assert_eq!(round_to_tenth(-1.68), -1.7);
        assert_eq!(round_to_tenth(0.0), 0.0);
    }
}
