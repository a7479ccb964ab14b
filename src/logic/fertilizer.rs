use super::tables::fertilizer::{crop_stages, CropStages, StageTemplate, DEFAULT_CROP};
use crate::error::{FarmOpsError, Result};
use crate::models::{FertilizerPlan, GrowthStage, IrrigationPlan, NutrientTotals, SoilType};
use serde::{Deserialize, Serialize};

/// How a (crop, stage) query was answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resolution {
    Exact,
    CropPlanting,
    DefaultCrop,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StagePlan {
    pub requested_crop: String,
    pub crop_name: String,
    pub stage: GrowthStage,
    pub stage_label: String,
    pub resolution: Resolution,
    /// Context only; dosing does not depend on it.
    pub soil_type: SoilType,
    pub land_area_ha: f64,
    pub fertilizer: FertilizerPlan,
    pub irrigation: IrrigationPlan,
    pub totals: NutrientTotals,
}

/// Find the template for (crop, stage): exact match, else the crop's planting
/// entry, else the default crop's planting entry.
pub(crate) fn resolve(
    crop_name: &str,
    stage: GrowthStage,
) -> Result<(&'static CropStages, &'static StageTemplate, Resolution)> {
    if let Some(crop) = crop_stages(crop_name) {
        if let Some(template) = crop.stage(stage) {
            return Ok((crop, template, Resolution::Exact));
        }
        if let Some(template) = crop.stage(GrowthStage::Planting) {
            tracing::debug!("No {} entry for {}, using planting entry", stage, crop.name);
            return Ok((crop, template, Resolution::CropPlanting));
        }
    }

    tracing::debug!(
        "No fertilizer table for '{}', using {} planting entry",
        crop_name,
        DEFAULT_CROP
    );
    let crop = crop_stages(DEFAULT_CROP).ok_or_else(|| {
        FarmOpsError::Config(format!("no table entry for default crop '{}'", DEFAULT_CROP))
    })?;
    let template = crop.stage(GrowthStage::Planting).ok_or_else(|| {
        FarmOpsError::Config(format!(
            "default crop '{}' has no planting entry",
            DEFAULT_CROP
        ))
    })?;
    Ok((crop, template, Resolution::DefaultCrop))
}

/// Per-hectare plan for a crop at a growth stage, with whole-field totals.
pub fn plan(
    crop_name: &str,
    stage: GrowthStage,
    soil_type: SoilType,
    land_area_ha: f64,
) -> Result<StagePlan> {
    if !land_area_ha.is_finite() || land_area_ha <= 0.0 {
        return Err(FarmOpsError::validation(
            "land_area",
            format!("must be greater than zero, got {}", land_area_ha),
        ));
    }

    let (crop, template, resolution) = resolve(crop_name, stage)?;
    let fertilizer = template.to_plan();
    let totals = fertilizer.total_for(land_area_ha);

    Ok(StagePlan {
        requested_crop: crop_name.trim().to_string(),
        crop_name: crop.name.to_string(),
        stage: template.stage,
        stage_label: template.label.to_string(),
        resolution,
        soil_type,
        land_area_ha,
        fertilizer,
        irrigation: template.irrigation.to_plan(),
        totals,
    })
}
