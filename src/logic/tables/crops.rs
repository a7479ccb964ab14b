//! Category → candidate crop table used by the recommendation scorer.

use crate::models::{CropCategory, FertilizerPlan, IrrigationPlan, Rating, Season};

/// Category used when a recognized category has no table entry.
pub const FALLBACK_CATEGORY: CropCategory = CropCategory::Cereals;

pub struct IrrigationTemplate {
    pub frequency: &'static str,
    pub amount: &'static str,
    pub seasons: &'static [&'static str],
}

impl IrrigationTemplate {
    pub fn to_plan(&self) -> IrrigationPlan {
        let mut plan = IrrigationPlan::new(self.frequency, self.amount);
        for season in self.seasons {
            plan = plan.with_season(*season);
        }
        plan
    }
}

pub struct NutrientTemplate {
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    pub schedule: &'static [&'static str],
}

impl NutrientTemplate {
    pub fn to_plan(&self) -> FertilizerPlan {
        let mut plan = FertilizerPlan::new(self.nitrogen, self.phosphorus, self.potassium);
        for step in self.schedule {
            plan = plan.with_step(*step);
        }
        plan
    }
}

/// A supporting reason, tagged with the condition it asserts.
#[derive(Debug, Clone, Copy)]
pub enum Reason {
    General(&'static str),
    /// Holds only while the soil pH is inside the crop's window.
    Ph(&'static str),
    /// Holds only while the season is a preferred one.
    Season(&'static str),
}

impl Reason {
    pub fn text(&self) -> &'static str {
        match self {
            Reason::General(t) | Reason::Ph(t) | Reason::Season(t) => t,
        }
    }
}

pub struct CropTemplate {
    pub name: &'static str,
    pub base_confidence: u8,
    pub reasons: &'static [Reason],
    pub expected_yield: u32,
    pub profitability: Rating,
    pub water_requirement: Rating,
    pub seasonality: &'static str,
    pub fertilizer: NutrientTemplate,
    pub irrigation: IrrigationTemplate,
    /// Inclusive pH window the crop tolerates without a score penalty.
    pub preferred_ph: (f64, f64),
    pub preferred_seasons: &'static [Season],
}

pub struct CategoryEntry {
    pub category: CropCategory,
    pub crops: &'static [CropTemplate],
}

pub fn candidates_for(category: CropCategory) -> Option<&'static [CropTemplate]> {
    CATEGORY_TABLE
        .iter()
        .find(|entry| entry.category == category)
        .map(|entry| entry.crops)
}

pub static CATEGORY_TABLE: &[CategoryEntry] = &[
    CategoryEntry {
        category: CropCategory::Cereals,
        crops: &[
            CropTemplate {
                name: "Rice",
                base_confidence: 94,
                reasons: &[
                    Reason::General("High soil moisture content is ideal for rice cultivation"),
                    Reason::Season("Current monsoon season provides optimal water availability"),
                    Reason::Ph("Soil pH level is within the preferred range (6.0-7.5)"),
                ],
                expected_yield: 6500,
                profitability: Rating::High,
                water_requirement: Rating::High,
                seasonality: "June - October (Kharif)",
                fertilizer: NutrientTemplate {
                    nitrogen: 150.0,
                    phosphorus: 60.0,
                    potassium: 40.0,
                    schedule: &[
                        "Apply 50% N + full P & K at transplanting",
                        "Apply 25% N at tillering",
                        "Apply 25% N at panicle initiation",
                    ],
                },
                irrigation: IrrigationTemplate {
                    frequency: "2-3 times per week",
                    amount: "5-10 cm standing water",
                    seasons: &["Throughout growing season"],
                },
                preferred_ph: (6.0, 7.5),
                preferred_seasons: &[Season::Monsoon],
            },
            CropTemplate {
                name: "Wheat",
                base_confidence: 88,
                reasons: &[
                    Reason::Season("Cool weather conditions favor wheat growth"),
                    Reason::General("Moderate water requirement suits current conditions"),
                    Reason::General("Good nitrogen content in soil"),
                ],
                expected_yield: 4200,
                profitability: Rating::High,
                water_requirement: Rating::Medium,
                seasonality: "November - April (Rabi)",
                fertilizer: NutrientTemplate {
                    nitrogen: 120.0,
                    phosphorus: 60.0,
                    potassium: 40.0,
                    schedule: &[
                        "Apply 50% N + full P & K at sowing",
                        "Apply 25% N at tillering",
                        "Apply 25% N at flowering",
                    ],
                },
                irrigation: IrrigationTemplate {
                    frequency: "Every 15-20 days",
                    amount: "5-6 cm per irrigation",
                    seasons: &["Winter season"],
                },
                preferred_ph: (6.0, 7.5),
                preferred_seasons: &[Season::Winter, Season::PostMonsoon],
            },
        ],
    },
    CategoryEntry {
        category: CropCategory::Pulses,
        crops: &[CropTemplate {
            name: "Chickpea (Chana)",
            base_confidence: 91,
            reasons: &[
                Reason::General("Nitrogen-fixing crop improves soil fertility"),
                Reason::General("Drought-tolerant nature suits current conditions"),
                Reason::General("Good market demand and pricing"),
            ],
            expected_yield: 2800,
            profitability: Rating::High,
            water_requirement: Rating::Low,
            seasonality: "October - March (Rabi)",
            fertilizer: NutrientTemplate {
                nitrogen: 20.0,
                phosphorus: 60.0,
                potassium: 40.0,
                schedule: &[
                    "Apply full P & K + 20kg N at sowing",
                    "No additional nitrogen needed",
                ],
            },
            irrigation: IrrigationTemplate {
                frequency: "2-3 irrigations total",
                amount: "4-5 cm per irrigation",
                seasons: &["Pre-flowering and pod formation"],
            },
            preferred_ph: (6.0, 8.0),
            preferred_seasons: &[Season::Winter, Season::PostMonsoon],
        }],
    },
    CategoryEntry {
        category: CropCategory::Oilseeds,
        crops: &[
            CropTemplate {
                name: "Groundnut",
                base_confidence: 86,
                reasons: &[
                    Reason::General("Light, well-drained soil favours pod development"),
                    Reason::General("Legume root nodules reduce nitrogen demand"),
                    Reason::General("Steady oil mill demand supports prices"),
                ],
                expected_yield: 2500,
                profitability: Rating::Medium,
                water_requirement: Rating::Medium,
                seasonality: "June - October (Kharif)",
                fertilizer: NutrientTemplate {
                    nitrogen: 25.0,
                    phosphorus: 50.0,
                    potassium: 45.0,
                    schedule: &[
                        "Apply full N, P & K at sowing",
                        "Apply gypsum at flowering for pod filling",
                    ],
                },
                irrigation: IrrigationTemplate {
                    frequency: "Every 10-15 days",
                    amount: "4-5 cm per irrigation",
                    seasons: &["Flowering and pegging stages"],
                },
                preferred_ph: (6.0, 7.5),
                preferred_seasons: &[Season::Monsoon, Season::Summer],
            },
            CropTemplate {
                name: "Sunflower",
                base_confidence: 82,
                reasons: &[
                    Reason::General("Short duration crop fits between main seasons"),
                    Reason::General("Tolerates moderate moisture stress"),
                    Reason::General("Good oil content fetches premium prices"),
                ],
                expected_yield: 1800,
                profitability: Rating::Medium,
                water_requirement: Rating::Low,
                seasonality: "January - April (Rabi/Summer)",
                fertilizer: NutrientTemplate {
                    nitrogen: 60.0,
                    phosphorus: 90.0,
                    potassium: 60.0,
                    schedule: &[
                        "Apply 50% N + full P & K at sowing",
                        "Apply 50% N at 30 days after sowing",
                    ],
                },
                irrigation: IrrigationTemplate {
                    frequency: "Every 12-15 days",
                    amount: "5 cm per irrigation",
                    seasons: &["Bud formation and seed filling"],
                },
                preferred_ph: (6.5, 8.0),
                preferred_seasons: &[Season::Winter, Season::Summer],
            },
        ],
    },
    CategoryEntry {
        category: CropCategory::Cash,
        crops: &[CropTemplate {
            name: "Cotton",
            base_confidence: 87,
            reasons: &[
                Reason::General("Moderate temperature and humidity suitable for cotton"),
                Reason::General("Good phosphorus levels in soil"),
                Reason::Season("Expected rainfall pattern matches cotton requirements"),
            ],
            expected_yield: 2800,
            profitability: Rating::High,
            water_requirement: Rating::Medium,
            seasonality: "May - October (Kharif)",
            fertilizer: NutrientTemplate {
                nitrogen: 120.0,
                phosphorus: 80.0,
                potassium: 60.0,
                schedule: &[
                    "Apply 25% N + full P & K at sowing",
                    "Apply 50% N at 45 days",
                    "Apply 25% N at 75 days",
                ],
            },
            irrigation: IrrigationTemplate {
                frequency: "1-2 times per week",
                amount: "4-6 cm per irrigation",
                seasons: &["Pre-flowering and flowering stages"],
            },
            preferred_ph: (5.8, 8.0),
            preferred_seasons: &[Season::Summer, Season::Monsoon],
        }],
    },
    CategoryEntry {
        category: CropCategory::Vegetables,
        crops: &[CropTemplate {
            name: "Tomato",
            base_confidence: 89,
            reasons: &[
                Reason::General("High value crop with good market demand"),
                Reason::General("Suitable temperature and humidity levels"),
                Reason::General("Rich soil nutrients support vegetable growth"),
            ],
            expected_yield: 45000,
            profitability: Rating::High,
            water_requirement: Rating::High,
            seasonality: "Year-round with protected cultivation",
            fertilizer: NutrientTemplate {
                nitrogen: 200.0,
                phosphorus: 100.0,
                potassium: 150.0,
                schedule: &[
                    "Apply 25% N + full P & K at transplanting",
                    "Apply 25% N at flowering",
                    "Apply 50% N in splits during fruiting",
                ],
            },
            irrigation: IrrigationTemplate {
                frequency: "Daily drip irrigation",
                amount: "2-3 liters per plant",
                seasons: &["Throughout growing period"],
            },
            preferred_ph: (6.0, 7.0),
            preferred_seasons: &[
                Season::Summer,
                Season::Monsoon,
                Season::PostMonsoon,
                Season::Winter,
            ],
        }],
    },
    CategoryEntry {
        category: CropCategory::Fruits,
        crops: &[
            CropTemplate {
                name: "Banana",
                base_confidence: 84,
                reasons: &[
                    Reason::General("Warm humid climate supports continuous growth"),
                    Reason::General("Year-round harvest gives steady income"),
                    Reason::General("Responds well to high potassium nutrition"),
                ],
                expected_yield: 40000,
                profitability: Rating::High,
                water_requirement: Rating::High,
                seasonality: "Year-round (planting best in June - July)",
                fertilizer: NutrientTemplate {
                    nitrogen: 200.0,
                    phosphorus: 60.0,
                    potassium: 300.0,
                    schedule: &[
                        "Apply full P + 25% N & K at planting",
                        "Apply 25% N & K at 3rd month",
                        "Apply 50% N & K in splits up to shooting",
                    ],
                },
                irrigation: IrrigationTemplate {
                    frequency: "Every 3-4 days",
                    amount: "15-20 liters per plant by drip",
                    seasons: &["Summer and post-monsoon months"],
                },
                preferred_ph: (6.0, 7.5),
                preferred_seasons: &[Season::Monsoon, Season::Summer],
            },
            CropTemplate {
                name: "Mango",
                base_confidence: 80,
                reasons: &[
                    Reason::General("Perennial orchard crop with long productive life"),
                    Reason::General("Tolerates a wide range of soils"),
                    Reason::General("Strong domestic and export demand"),
                ],
                expected_yield: 10000,
                profitability: Rating::High,
                water_requirement: Rating::Medium,
                seasonality: "Plant July - August, harvest April - June",
                fertilizer: NutrientTemplate {
                    nitrogen: 100.0,
                    phosphorus: 50.0,
                    potassium: 100.0,
                    schedule: &[
                        "Apply farm yard manure with full P at planting",
                        "Apply N & K in two splits after harvest and before flowering",
                    ],
                },
                irrigation: IrrigationTemplate {
                    frequency: "Every 10-15 days for young plants",
                    amount: "Basin irrigation to root zone",
                    seasons: &["Dry months until monsoon onset"],
                },
                preferred_ph: (5.5, 7.5),
                preferred_seasons: &[Season::Monsoon],
            },
        ],
    },
    CategoryEntry {
        category: CropCategory::Spices,
        crops: &[
            CropTemplate {
                name: "Turmeric",
                base_confidence: 85,
                reasons: &[
                    Reason::General("Loamy soil rich in organic matter suits rhizome growth"),
                    Reason::Season("Monsoon rainfall meets most of the water demand"),
                    Reason::General("High value spice with established mandi trade"),
                ],
                expected_yield: 6000,
                profitability: Rating::High,
                water_requirement: Rating::Medium,
                seasonality: "May - January (Kharif)",
                fertilizer: NutrientTemplate {
                    nitrogen: 120.0,
                    phosphorus: 60.0,
                    potassium: 120.0,
                    schedule: &[
                        "Apply full P + 50% K at planting",
                        "Apply 50% N at 40 days",
                        "Apply 50% N + 50% K at 90 days",
                    ],
                },
                irrigation: IrrigationTemplate {
                    frequency: "Every 7-10 days outside rains",
                    amount: "Light furrow irrigation",
                    seasons: &["Post-monsoon growth period"],
                },
                preferred_ph: (5.0, 7.5),
                preferred_seasons: &[Season::Monsoon],
            },
            CropTemplate {
                name: "Chili",
                base_confidence: 83,
                reasons: &[
                    Reason::General("Warm days and moderate humidity favour fruit set"),
                    Reason::General("Short cycle allows two crops a year"),
                    Reason::General("Both green and dry chili markets available"),
                ],
                expected_yield: 2500,
                profitability: Rating::Medium,
                water_requirement: Rating::Medium,
                seasonality: "June - January (Kharif/Rabi)",
                fertilizer: NutrientTemplate {
                    nitrogen: 120.0,
                    phosphorus: 60.0,
                    potassium: 60.0,
                    schedule: &[
                        "Apply 50% N + full P & K at transplanting",
                        "Apply 25% N at flowering",
                        "Apply 25% N at fruit set",
                    ],
                },
                irrigation: IrrigationTemplate {
                    frequency: "Every 5-7 days",
                    amount: "3-4 cm per irrigation",
                    seasons: &["Flowering and fruiting stages"],
                },
                preferred_ph: (6.0, 7.0),
                preferred_seasons: &[Season::Monsoon, Season::Winter],
            },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn general_has_no_entry() {
        assert!(candidates_for(CropCategory::General).is_none());
        assert!(candidates_for(CropCategory::Other).is_none());
    }

    #[test]
    fn fallback_category_is_populated() {
        let crops = candidates_for(FALLBACK_CATEGORY).unwrap();
        assert!(!crops.is_empty());
    }

    #[test]
    fn every_template_is_fully_populated() {
        for entry in CATEGORY_TABLE {
            assert!(!entry.crops.is_empty(), "{:?} has no crops", entry.category);
            for crop in entry.crops {
                assert!(crop.base_confidence <= 100, "{}", crop.name);
                assert!(
                    crop.reasons.iter().any(|r| matches!(r, Reason::General(_))),
                    "{} needs an unconditional reason",
                    crop.name
                );
                assert!(crop.expected_yield > 0, "{}", crop.name);
                assert!(!crop.fertilizer.schedule.is_empty(), "{}", crop.name);
                assert!(!crop.irrigation.seasons.is_empty(), "{}", crop.name);
                assert!(!crop.preferred_seasons.is_empty(), "{}", crop.name);
                assert!(crop.preferred_ph.0 <= crop.preferred_ph.1, "{}", crop.name);
            }
        }
    }

    #[test]
    fn template_converts_to_plans() {
        let rice = &candidates_for(CropCategory::Cereals).unwrap()[0];
        let fertilizer = rice.fertilizer.to_plan();
        assert_eq!(fertilizer.nitrogen, 150.0);
        assert_eq!(fertilizer.schedule.len(), 3);
        let irrigation = rice.irrigation.to_plan();
        assert_eq!(irrigation.amount, "5-10 cm standing water");
        assert_eq!(irrigation.seasons, vec!["Throughout growing season"]);
    }
}
