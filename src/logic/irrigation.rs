use super::fertilizer::resolve;
use crate::error::Result;
use crate::models::{FollowUpIrrigation, GrowthStage, IrrigationPlan};

/// Irrigation guidance for a crop's planting stage. Uses the same template and
/// fallbacks as the fertilizer planner.
pub fn schedule(crop_name: &str) -> Result<IrrigationPlan> {
    schedule_for_stage(crop_name, GrowthStage::Planting)
}

pub fn schedule_for_stage(crop_name: &str, stage: GrowthStage) -> Result<IrrigationPlan> {
    let (_, template, _) = resolve(crop_name, stage)?;
    Ok(template.irrigation.to_plan())
}

/// Watering steps to follow any fertilizer application.
pub fn post_application() -> Vec<FollowUpIrrigation> {
    [
        (
            "After fertilizer application",
            "Immediate",
            "Light watering",
            "Nutrient activation",
        ),
        (
            "24-48 hours later",
            "1-2 days",
            "Normal irrigation",
            "Root uptake facilitation",
        ),
        (
            "Follow-up",
            "7 days",
            "As per crop requirement",
            "Continued nutrient availability",
        ),
    ]
    .into_iter()
    .map(|(stage, timing, amount, purpose)| FollowUpIrrigation {
        stage: stage.to_string(),
        timing: timing.to_string(),
        amount: amount.to_string(),
        purpose: purpose.to_string(),
    })
    .collect()
}
