use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Severity::Low => "→",
            Severity::Medium => "⚠",
            Severity::High => "!",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Stands in for an uploaded pest photo: where it came from and which crop
/// it was taken on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleDescriptor {
    pub source: String,
    pub crop_type: String,
}

impl SampleDescriptor {
    pub fn new(source: impl Into<String>, crop_type: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            crop_type: crop_type.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PestFinding {
    pub pest_name: String,
    pub confidence: u8,
    pub severity: Severity,
    pub remedies: Vec<String>,
    pub organic_solutions: Vec<String>,
    pub preventive_measures: Vec<String>,
}

impl PestFinding {
    pub fn is_complete(&self) -> bool {
        !self.pest_name.trim().is_empty()
            && self.confidence <= 100
            && !self.remedies.is_empty()
            && !self.organic_solutions.is_empty()
            && !self.preventive_measures.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommonPest {
    pub name: String,
    pub crops: Vec<String>,
}
