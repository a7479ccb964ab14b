use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    Summer,
    Monsoon,
    PostMonsoon,
    Winter,
}

impl Season {
    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Summer => "Summer",
            Season::Monsoon => "Monsoon",
            Season::PostMonsoon => "Post-Monsoon",
            Season::Winter => "Winter",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "summer" | "zaid" => Some(Season::Summer),
            "monsoon" | "kharif" => Some(Season::Monsoon),
            "postmonsoon" | "post_monsoon" | "post-monsoon" | "post monsoon" => {
                Some(Season::PostMonsoon)
            }
            "winter" | "rabi" => Some(Season::Winter),
            _ => None,
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Weather conditions for a single request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub temperature_c: f64,
    pub humidity_percent: f64,
    pub rainfall_mm: f64,
    pub season: Season,
}

impl Default for WeatherSnapshot {
    fn default() -> Self {
        Self {
            temperature_c: 25.0,
            humidity_percent: 65.0,
            rainfall_mm: 100.0,
            season: Season::Monsoon,
        }
    }
}
