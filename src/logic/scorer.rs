use super::tables::crops::{candidates_for, CropTemplate, Reason, FALLBACK_CATEGORY};
use crate::error::{FarmOpsError, Result};
use crate::models::{
    CropCategory, CropRecommendation, CropSelection, FertilizerPlan, IrrigationPlan, Rating,
    SoilSample, WeatherSnapshot,
};

pub const PH_PENALTY: u8 = 5;
pub const SEASON_PENALTY: u8 = 10;

pub const CUSTOM_CONFIDENCE: u8 = 85;
pub const CUSTOM_YIELD_KG_HA: u32 = 3500;

/// Rank candidate crops for a selection.
///
/// Confidence starts at the table's base score and loses a fixed penalty when
/// the soil pH falls outside the crop's window or the season is off. The
/// result is sorted by descending confidence, then crop name.
pub fn recommend(
    selection: &CropSelection,
    soil: &SoilSample,
    weather: &WeatherSnapshot,
) -> Result<Vec<CropRecommendation>> {
    let mut recommendations = match selection {
        CropSelection::Custom(name) => vec![custom_recommendation(name)],
        CropSelection::Category(CropCategory::Other) => return Err(FarmOpsError::MissingCropName),
        CropSelection::Category(category) => {
            let candidates = candidates_for(*category).unwrap_or_else(|| {
                tracing::debug!(
                    "No crop table for {}, falling back to {}",
                    category,
                    FALLBACK_CATEGORY
                );
                candidates_for(FALLBACK_CATEGORY).unwrap_or(&[])
            });
            candidates
                .iter()
                .map(|template| score(template, soil, weather))
                .collect()
        }
    };

    rank(&mut recommendations);
    Ok(recommendations)
}

fn score(
    template: &CropTemplate,
    soil: &SoilSample,
    weather: &WeatherSnapshot,
) -> CropRecommendation {
    let mut confidence = template.base_confidence;
    let mut cautions = Vec::new();

    let (ph_low, ph_high) = template.preferred_ph;
    let ph_ok = (ph_low..=ph_high).contains(&soil.ph);
    let season_ok = template.preferred_seasons.contains(&weather.season);

    if !ph_ok {
        confidence = confidence.saturating_sub(PH_PENALTY);
        cautions.push(format!(
            "Soil pH {:.1} is outside the preferred range ({:.1}-{:.1})",
            soil.ph, ph_low, ph_high
        ));
    }

    if !season_ok {
        confidence = confidence.saturating_sub(SEASON_PENALTY);
        cautions.push(format!(
            "{} is outside the usual growing window ({})",
            weather.season, template.seasonality
        ));
    }

    tracing::debug!(
        "Scored {} at {} (base {})",
        template.name,
        confidence,
        template.base_confidence
    );

    let mut rec = CropRecommendation::new(template.name, confidence)
        .with_yield(template.expected_yield)
        .with_ratings(template.profitability, template.water_requirement)
        .with_seasonality(template.seasonality)
        .with_plans(template.fertilizer.to_plan(), template.irrigation.to_plan());

    // Conditional reasons are dropped once their condition fails.
    for reason in template.reasons {
        let holds = match reason {
            Reason::General(_) => true,
            Reason::Ph(_) => ph_ok,
            Reason::Season(_) => season_ok,
        };
        if holds {
            rec = rec.with_reason(reason.text());
        }
    }
    for caution in cautions {
        rec = rec.with_reason(caution);
    }
    rec
}

fn custom_recommendation(name: &str) -> CropRecommendation {
    let fertilizer = FertilizerPlan::new(100.0, 50.0, 50.0)
        .with_step("Apply balanced fertilizer at planting")
        .with_step("Top dress with nitrogen during growth")
        .with_step("Apply potash during reproductive stage");
    let irrigation = IrrigationPlan::new("As per crop requirement", "Monitor soil moisture")
        .with_season("Throughout growing season");

    CropRecommendation::new(capitalize(name), CUSTOM_CONFIDENCE)
        .with_reason(format!(
            "Analysis suggests {} is suitable for your soil conditions",
            name
        ))
        .with_reason(format!(
            "Current weather parameters are favorable for {} cultivation",
            name
        ))
        .with_reason(format!(
            "Soil nutrient levels can support {} growth with proper management",
            name
        ))
        .with_yield(CUSTOM_YIELD_KG_HA)
        .with_ratings(Rating::Medium, Rating::Medium)
        .with_seasonality("Season depends on crop variety")
        .with_plans(fertilizer, irrigation)
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn rank(recommendations: &mut [CropRecommendation]) {
    recommendations.sort_by(|a, b| {
        b.confidence
            .cmp(&a.confidence)
            .then_with(|| a.crop_name.cmp(&b.crop_name))
    });
}
