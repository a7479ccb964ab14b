//! Semantic validation of raw farm parameters.
//!
//! Parsing text into numbers is the caller's job; this module decides whether
//! the numbers make agronomic sense, fills gaps from the configured baseline
//! and clamps pH.

use super::engine::RecommendationRequest;
use crate::config::BaselineConfig;
use crate::error::{FarmOpsError, Result};
use crate::models::{
    CropCategory, CropSelection, Season, SoilSample, WeatherSnapshot, PH_MAX, PH_MIN,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawSoilInput {
    pub nitrogen: Option<f64>,
    pub phosphorus: Option<f64>,
    pub potassium: Option<f64>,
    pub ph: Option<f64>,
    pub organic_carbon: Option<f64>,
    pub moisture: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawWeatherInput {
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub rainfall: Option<f64>,
    pub season: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawRecommendationInput {
    pub category: String,
    pub crop_name: Option<String>,
    pub soil: RawSoilInput,
    pub weather: RawWeatherInput,
    pub land_area: Option<f64>,
}

#[derive(Debug, Clone, Default)]
pub struct ParameterValidator {
    baseline: BaselineConfig,
}

impl ParameterValidator {
    pub fn new(baseline: BaselineConfig) -> Self {
        Self { baseline }
    }

    /// Validate a full recommendation request. The category is checked first
    /// so a missing custom crop name is reported before any numeric problem.
    pub fn request(&self, raw: &RawRecommendationInput) -> Result<RecommendationRequest> {
        let selection = self.selection(&raw.category, raw.crop_name.as_deref())?;
        let soil = self.soil(&raw.soil)?;
        let weather = self.weather(&raw.weather)?;
        let land_area_ha = self.land_area(raw.land_area)?;

        Ok(RecommendationRequest {
            selection,
            soil,
            weather,
            land_area_ha,
        })
    }

    pub fn selection(&self, category: &str, custom_name: Option<&str>) -> Result<CropSelection> {
        let category = CropCategory::from_str(category).ok_or_else(|| {
            FarmOpsError::validation("category", format!("unknown crop category '{}'", category))
        })?;

        if category != CropCategory::Other {
            return Ok(CropSelection::Category(category));
        }

        match custom_name.map(str::trim) {
            Some(name) if !name.is_empty() => Ok(CropSelection::Custom(name.to_string())),
            _ => Err(FarmOpsError::MissingCropName),
        }
    }

    pub fn soil(&self, raw: &RawSoilInput) -> Result<SoilSample> {
        let ph = finite("ph", raw.ph.unwrap_or(self.baseline.ph))?;
        let clamped_ph = ph.clamp(PH_MIN, PH_MAX);
        if clamped_ph != ph {
            tracing::debug!("Clamped soil pH {} to {}", ph, clamped_ph);
        }

        Ok(SoilSample {
            nitrogen: non_negative("nitrogen", raw.nitrogen.unwrap_or(0.0))?,
            phosphorus: non_negative("phosphorus", raw.phosphorus.unwrap_or(0.0))?,
            potassium: non_negative("potassium", raw.potassium.unwrap_or(0.0))?,
            ph: clamped_ph,
            organic_carbon: non_negative("organic_carbon", raw.organic_carbon.unwrap_or(0.0))?,
            moisture: percentage("moisture", raw.moisture.unwrap_or(0.0))?,
        })
    }

    pub fn weather(&self, raw: &RawWeatherInput) -> Result<WeatherSnapshot> {
        let season = match raw.season.as_deref() {
            Some(s) => Season::from_str(s).ok_or_else(|| {
                FarmOpsError::validation("season", format!("unknown season '{}'", s))
            })?,
            None => Season::Monsoon,
        };

        Ok(WeatherSnapshot {
            temperature_c: finite(
                "temperature",
                raw.temperature.unwrap_or(self.baseline.temperature),
            )?,
            humidity_percent: percentage("humidity", raw.humidity.unwrap_or(self.baseline.humidity))?,
            rainfall_mm: non_negative("rainfall", raw.rainfall.unwrap_or(self.baseline.rainfall))?,
            season,
        })
    }

    pub fn land_area(&self, raw: Option<f64>) -> Result<f64> {
        let area = finite("land_area", raw.unwrap_or(self.baseline.land_area))?;
        if area <= 0.0 {
            return Err(FarmOpsError::validation(
                "land_area",
                format!("must be greater than zero, got {}", area),
            ));
        }
        Ok(area)
    }
}

fn finite(field: &str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(FarmOpsError::validation(field, "must be a finite number"))
    }
}

fn non_negative(field: &str, value: f64) -> Result<f64> {
    let value = finite(field, value)?;
    if value < 0.0 {
        return Err(FarmOpsError::validation(
            field,
            format!("must not be negative, got {}", value),
        ));
    }
    Ok(value)
}

fn percentage(field: &str, value: f64) -> Result<f64> {
    let value = finite(field, value)?;
    if !(0.0..=100.0).contains(&value) {
        return Err(FarmOpsError::validation(
            field,
            format!("must be between 0 and 100, got {}", value),
        ));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator() -> ParameterValidator {
        ParameterValidator::new(BaselineConfig::default())
    }

    fn field_of(err: FarmOpsError) -> String {
        match err {
            FarmOpsError::Validation { field, .. } => field,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn missing_fields_use_baseline() {
        let v = validator();
        let soil = v.soil(&RawSoilInput::default()).unwrap();
        assert_eq!(soil.ph, 7.0);
        assert_eq!(soil.nitrogen, 0.0);

        let weather = v.weather(&RawWeatherInput::default()).unwrap();
        assert_eq!(weather.temperature_c, 25.0);
        assert_eq!(weather.humidity_percent, 65.0);
        assert_eq!(weather.rainfall_mm, 100.0);
        assert_eq!(weather.season, Season::Monsoon);

        assert_eq!(v.land_area(None).unwrap(), 1.0);
    }

    #[test]
    fn custom_baseline_is_honoured() {
        let v = ParameterValidator::new(BaselineConfig {
            ph: 6.5,
            humidity: 50.0,
            rainfall: 20.0,
            temperature: 30.0,
            land_area: 2.5,
        });
        assert_eq!(v.soil(&RawSoilInput::default()).unwrap().ph, 6.5);
        assert_eq!(v.weather(&RawWeatherInput::default()).unwrap().rainfall_mm, 20.0);
        assert_eq!(v.land_area(None).unwrap(), 2.5);
    }

    #[test]
    fn ph_is_clamped_not_rejected() {
        let v = validator();
        let high = RawSoilInput {
            ph: Some(15.2),
            ..Default::default()
        };
        assert_eq!(v.soil(&high).unwrap().ph, 14.0);

        let low = RawSoilInput {
            ph: Some(0.0),
            ..Default::default()
        };
        assert_eq!(v.soil(&low).unwrap().ph, 1.0);
    }

    #[test]
    fn negative_nutrient_names_field() {
        let raw = RawSoilInput {
            potassium: Some(-3.0),
            ..Default::default()
        };
        let err = validator().soil(&raw).unwrap_err();
        assert_eq!(field_of(err), "potassium");
    }

    #[test]
    fn moisture_and_humidity_bounded() {
        let v = validator();
        let soil = RawSoilInput {
            moisture: Some(101.0),
            ..Default::default()
        };
        assert_eq!(field_of(v.soil(&soil).unwrap_err()), "moisture");

        let weather = RawWeatherInput {
            humidity: Some(-1.0),
            ..Default::default()
        };
        assert_eq!(field_of(v.weather(&weather).unwrap_err()), "humidity");
    }

    #[test]
    fn non_finite_values_rejected() {
        let weather = RawWeatherInput {
            temperature: Some(f64::NAN),
            ..Default::default()
        };
        assert_eq!(
            field_of(validator().weather(&weather).unwrap_err()),
            "temperature"
        );
    }

    #[test]
    fn unknown_season_rejected() {
        let weather = RawWeatherInput {
            season: Some("spring".into()),
            ..Default::default()
        };
        assert_eq!(field_of(validator().weather(&weather).unwrap_err()), "season");
    }

    #[test]
    fn land_area_must_be_positive() {
        let v = validator();
        assert_eq!(field_of(v.land_area(Some(0.0)).unwrap_err()), "land_area");
        assert_eq!(field_of(v.land_area(Some(-2.0)).unwrap_err()), "land_area");
        assert_eq!(v.land_area(Some(2.0)).unwrap(), 2.0);
    }

    #[test]
    fn unknown_category_is_validation_error() {
        let err = validator().selection("flowers", None).unwrap_err();
        assert_eq!(field_of(err), "category");
    }

    #[test]
    fn other_requires_crop_name() {
        let v = validator();
        assert!(matches!(
            v.selection("other", None),
            Err(FarmOpsError::MissingCropName)
        ));
        assert!(matches!(
            v.selection("other", Some("   ")),
            Err(FarmOpsError::MissingCropName)
        ));
        assert_eq!(
            v.selection("other", Some("  Quinoa ")).unwrap(),
            CropSelection::Custom("Quinoa".into())
        );
    }

    #[test]
    fn crop_name_ignored_for_fixed_categories() {
        assert_eq!(
            validator().selection("pulses", Some("Quinoa")).unwrap(),
            CropSelection::Category(CropCategory::Pulses)
        );
    }

    #[test]
    fn missing_crop_name_reported_before_numeric_errors() {
        let raw = RawRecommendationInput {
            category: "other".into(),
            crop_name: None,
            soil: RawSoilInput {
                nitrogen: Some(-1.0),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(matches!(
            validator().request(&raw),
            Err(FarmOpsError::MissingCropName)
        ));
    }

    #[test]
    fn full_request_validates() {
        let raw = RawRecommendationInput {
            category: "cereals".into(),
            crop_name: None,
            soil: RawSoilInput {
                nitrogen: Some(280.0),
                phosphorus: Some(25.0),
                potassium: Some(180.0),
                ph: Some(6.8),
                organic_carbon: Some(0.6),
                moisture: Some(35.0),
            },
            weather: RawWeatherInput {
                temperature: Some(29.0),
                humidity: Some(80.0),
                rainfall: Some(220.0),
                season: Some("monsoon".into()),
            },
            land_area: Some(2.0),
        };
        let request = validator().request(&raw).unwrap();
        assert_eq!(request.selection, CropSelection::Category(CropCategory::Cereals));
        assert_eq!(request.soil.nitrogen, 280.0);
        assert_eq!(request.weather.season, Season::Monsoon);
        assert_eq!(request.land_area_ha, 2.0);
    }
}
