//! Crop → growth stage → fertilizer/irrigation template table.

use super::crops::IrrigationTemplate;
use crate::models::{FertilizerPlan, GrowthStage, OrganicAlternative};

/// Crop whose planting entry answers for crops missing from the table.
pub const DEFAULT_CROP: &str = "rice";

pub struct StageTemplate {
    pub stage: GrowthStage,
    pub label: &'static str,
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    pub application_time: &'static str,
    pub method: &'static str,
    pub frequency: &'static str,
    pub irrigation: IrrigationTemplate,
}

impl StageTemplate {
    pub fn to_plan(&self) -> FertilizerPlan {
        FertilizerPlan::new(self.nitrogen, self.phosphorus, self.potassium)
            .with_step(format!("{}: {}", self.label, self.application_time))
            .with_step(format!("Method: {}", self.method))
            .with_step(format!("Frequency: {}", self.frequency))
    }
}

pub struct CropStages {
    pub key: &'static str,
    pub name: &'static str,
    pub stages: &'static [StageTemplate],
}

impl CropStages {
    pub fn stage(&self, stage: GrowthStage) -> Option<&'static StageTemplate> {
        self.stages.iter().find(|s| s.stage == stage)
    }
}

pub fn crop_stages(crop_name: &str) -> Option<&'static CropStages> {
    let key = crop_name.trim().to_lowercase();
    STAGE_TABLE.iter().find(|c| c.key == key)
}

pub static STAGE_TABLE: &[CropStages] = &[
    CropStages {
        key: "rice",
        name: "Rice",
        stages: &[
            StageTemplate {
                stage: GrowthStage::Planting,
                label: "Planting/Transplanting",
                nitrogen: 60.0,
                phosphorus: 30.0,
                potassium: 20.0,
                application_time: "At transplanting",
                method: "Broadcast and incorporate",
                frequency: "Once",
                irrigation: IrrigationTemplate {
                    frequency: "Maintain continuously",
                    amount: "5-7 cm standing water",
                    seasons: &["Planting/Transplanting"],
                },
            },
            StageTemplate {
                stage: GrowthStage::Vegetative,
                label: "Vegetative Growth",
                nitrogen: 40.0,
                phosphorus: 0.0,
                potassium: 20.0,
                application_time: "21 days after transplanting",
                method: "Top dressing",
                frequency: "Once",
                irrigation: IrrigationTemplate {
                    frequency: "Maintain continuously",
                    amount: "5-7 cm standing water",
                    seasons: &["Vegetative Growth"],
                },
            },
            StageTemplate {
                stage: GrowthStage::Flowering,
                label: "Panicle Initiation",
                nitrogen: 40.0,
                phosphorus: 0.0,
                potassium: 0.0,
                application_time: "42 days after transplanting",
                method: "Top dressing",
                frequency: "Once",
                irrigation: IrrigationTemplate {
                    frequency: "Maintain continuously",
                    amount: "5-7 cm standing water",
                    seasons: &["Panicle Initiation"],
                },
            },
        ],
    },
    CropStages {
        key: "wheat",
        name: "Wheat",
        stages: &[
            StageTemplate {
                stage: GrowthStage::Planting,
                label: "Sowing",
                nitrogen: 60.0,
                phosphorus: 60.0,
                potassium: 40.0,
                application_time: "At sowing",
                method: "Drill below the seed",
                frequency: "Once",
                irrigation: IrrigationTemplate {
                    frequency: "Crown root irrigation at 21 days",
                    amount: "5-6 cm per irrigation",
                    seasons: &["Sowing"],
                },
            },
            StageTemplate {
                stage: GrowthStage::Vegetative,
                label: "Tillering",
                nitrogen: 30.0,
                phosphorus: 0.0,
                potassium: 0.0,
                application_time: "40-45 days after sowing",
                method: "Top dressing",
                frequency: "Once",
                irrigation: IrrigationTemplate {
                    frequency: "Every 15-20 days",
                    amount: "5-6 cm per irrigation",
                    seasons: &["Tillering"],
                },
            },
            StageTemplate {
                stage: GrowthStage::Flowering,
                label: "Flowering",
                nitrogen: 30.0,
                phosphorus: 0.0,
                potassium: 0.0,
                application_time: "At ear emergence",
                method: "Top dressing",
                frequency: "Once",
                irrigation: IrrigationTemplate {
                    frequency: "Every 15-20 days",
                    amount: "5-6 cm per irrigation",
                    seasons: &["Flowering"],
                },
            },
        ],
    },
    CropStages {
        key: "cotton",
        name: "Cotton",
        stages: &[
            StageTemplate {
                stage: GrowthStage::Planting,
                label: "Sowing",
                nitrogen: 30.0,
                phosphorus: 60.0,
                potassium: 30.0,
                application_time: "At sowing",
                method: "Seed furrow placement",
                frequency: "Once",
                irrigation: IrrigationTemplate {
                    frequency: "After sowing",
                    amount: "Light irrigation",
                    seasons: &["Sowing"],
                },
            },
            StageTemplate {
                stage: GrowthStage::Vegetative,
                label: "Square Formation",
                nitrogen: 60.0,
                phosphorus: 0.0,
                potassium: 30.0,
                application_time: "45 days after sowing",
                method: "Side dressing",
                frequency: "Split application",
                irrigation: IrrigationTemplate {
                    frequency: "1-2 times per week",
                    amount: "Regular irrigation",
                    seasons: &["Square Formation"],
                },
            },
        ],
    },
    CropStages {
        key: "tomato",
        name: "Tomato",
        stages: &[
            StageTemplate {
                stage: GrowthStage::Planting,
                label: "Transplanting",
                nitrogen: 50.0,
                phosphorus: 100.0,
                potassium: 150.0,
                application_time: "At transplanting",
                method: "Band placement",
                frequency: "Once",
                irrigation: IrrigationTemplate {
                    frequency: "Daily drip irrigation",
                    amount: "1-2 liters per plant",
                    seasons: &["Transplanting"],
                },
            },
            StageTemplate {
                stage: GrowthStage::Flowering,
                label: "Flowering",
                nitrogen: 50.0,
                phosphorus: 0.0,
                potassium: 0.0,
                application_time: "30 days after transplanting",
                method: "Fertigation",
                frequency: "Once",
                irrigation: IrrigationTemplate {
                    frequency: "Daily drip irrigation",
                    amount: "2-3 liters per plant",
                    seasons: &["Flowering"],
                },
            },
            StageTemplate {
                stage: GrowthStage::Fruiting,
                label: "Fruiting",
                nitrogen: 100.0,
                phosphorus: 0.0,
                potassium: 0.0,
                application_time: "From 45 days after transplanting",
                method: "Fertigation",
                frequency: "In 3-4 splits",
                irrigation: IrrigationTemplate {
                    frequency: "Daily drip irrigation",
                    amount: "2-3 liters per plant",
                    seasons: &["Fruiting"],
                },
            },
        ],
    },
];

pub fn organic_alternatives() -> Vec<OrganicAlternative> {
    [
        (
            "Vermicompost",
            "1-0.5-1",
            "2-3 tons per hectare",
            "Improves soil structure, water retention, and microbial activity",
        ),
        (
            "Farm Yard Manure",
            "0.5-0.2-0.5",
            "10-15 tons per hectare",
            "Slow release nutrients, organic matter addition",
        ),
        (
            "Neem Cake",
            "5-1-1",
            "200-250 kg per hectare",
            "Pest control properties, slow release nitrogen",
        ),
        (
            "Green Manure",
            "Variable",
            "Incorporate before flowering",
            "Nitrogen fixation, soil fertility improvement",
        ),
    ]
    .into_iter()
    .map(|(name, npk, application, benefits)| OrganicAlternative {
        name: name.to_string(),
        npk: npk.to_string(),
        application: application.to_string(),
        benefits: benefits.to_string(),
    })
    .collect()
}
