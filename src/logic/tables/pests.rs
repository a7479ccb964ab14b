use crate::models::{CommonPest, PestFinding, Severity};

pub struct FindingTemplate {
    pub pest_name: &'static str,
    pub confidence: u8,
    pub severity: Severity,
    pub remedies: &'static [&'static str],
    pub organic_solutions: &'static [&'static str],
    pub preventive_measures: &'static [&'static str],
}

impl FindingTemplate {
    pub fn to_finding(&self) -> PestFinding {
        let owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        PestFinding {
            pest_name: self.pest_name.to_string(),
            confidence: self.confidence,
            severity: self.severity,
            remedies: owned(self.remedies),
            organic_solutions: owned(self.organic_solutions),
            preventive_measures: owned(self.preventive_measures),
        }
    }
}

pub static REFERENCE_FINDING: FindingTemplate = FindingTemplate {
    pest_name: "Brown Plant Hopper",
    confidence: 87,
    severity: Severity::Medium,
    remedies: &[
        "Spray Neem oil solution (5ml per liter of water)",
        "Apply Imidacloprid 17.8% SL @ 100ml per acre",
        "Use sticky yellow traps to catch adult hoppers",
        "Remove and destroy heavily infested plants",
    ],
    organic_solutions: &[
        "Neem oil spray (10ml per liter)",
        "Soap solution spray (5ml liquid soap per liter)",
        "Release natural predators like ladybirds",
        "Use pheromone traps for monitoring",
    ],
    preventive_measures: &[
        "Maintain proper plant spacing for air circulation",
        "Avoid excessive nitrogen fertilization",
        "Remove weeds and plant debris regularly",
        "Monitor plants weekly for early detection",
    ],
};

static COMMON_PESTS: &[(&str, &[&str])] = &[
    ("Aphids", &["Rice", "Wheat", "Cotton"]),
    ("Brown Plant Hopper", &["Rice"]),
    ("Bollworm", &["Cotton"]),
    ("Stem Borer", &["Rice", "Sugarcane"]),
];

pub fn common_pests() -> Vec<CommonPest> {
    COMMON_PESTS
        .iter()
        .map(|(name, crops)| CommonPest {
            name: name.to_string(),
            crops: crops.iter().map(|c| c.to_string()).collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_finding_is_complete() {
        let finding = REFERENCE_FINDING.to_finding();
        assert!(finding.is_complete());
        assert_eq!(finding.remedies.len(), 4);
    }

    #[test]
    fn common_pests_catalogue() {
        let pests = common_pests();
        assert_eq!(pests.len(), 4);
        assert_eq!(pests[3].name, "Stem Borer");
        assert_eq!(pests[3].crops, vec!["Rice", "Sugarcane"]);
    }
}
