use super::fertilizer::{self, StagePlan};
use super::pest::{self, PestClassifier, ReferenceClassifier};
use super::validator::{ParameterValidator, RawRecommendationInput};
use super::{irrigation, market, scorer};
use crate::config::Config;
use crate::error::{FarmOpsError, Result};
use crate::models::{
    CropRecommendation, CropSelection, GrowthStage, IrrigationPlan, MarketQuote, NutrientTotals,
    PestFinding, SampleDescriptor, SoilSample, SoilType, TrendAnalysis, WeatherSnapshot,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

/// One validated evaluation request. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationRequest {
    pub selection: CropSelection,
    pub soil: SoilSample,
    pub weather: WeatherSnapshot,
    pub land_area_ha: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationEntry {
    #[serde(flatten)]
    pub recommendation: CropRecommendation,
    /// Whole-field nutrient totals for the request's land area.
    pub total_dose: NutrientTotals,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationReport {
    pub request: RecommendationRequest,
    pub recommendations: Vec<RecommendationEntry>,
}

pub struct RecommendationEngine {
    validator: ParameterValidator,
    classifier: Box<dyn PestClassifier>,
    analysis_delay: Duration,
}

impl RecommendationEngine {
    pub fn new(config: &Config) -> Self {
        Self {
            validator: ParameterValidator::new(config.baseline),
            classifier: Box::new(ReferenceClassifier),
            analysis_delay: Duration::from_millis(config.engine.analysis_delay_ms),
        }
    }

    pub fn with_classifier(mut self, classifier: Box<dyn PestClassifier>) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn with_analysis_delay(mut self, delay: Duration) -> Self {
        self.analysis_delay = delay;
        self
    }

    pub fn validator(&self) -> &ParameterValidator {
        &self.validator
    }

    pub fn analysis_delay(&self) -> Duration {
        self.analysis_delay
    }

    pub fn build_request(&self, raw: &RawRecommendationInput) -> Result<RecommendationRequest> {
        self.validator.request(raw)
    }

    pub fn evaluate(&self, request: &RecommendationRequest) -> Result<RecommendationReport> {
        let recommendations = scorer::recommend(&request.selection, &request.soil, &request.weather)?
            .into_iter()
            .map(|recommendation| {
                let total_dose = recommendation.fertilizer.total_for(request.land_area_ha);
                RecommendationEntry {
                    recommendation,
                    total_dose,
                }
            })
            .collect::<Vec<_>>();

        tracing::debug!(
            "Evaluated {:?}: {} recommendation(s)",
            request.selection,
            recommendations.len()
        );

        Ok(RecommendationReport {
            request: request.clone(),
            recommendations,
        })
    }

    /// Run `evaluate` on a background task once the analysis delay elapses.
    pub fn submit(self: &Arc<Self>, request: RecommendationRequest) -> PendingRecommendation {
        let engine = Arc::clone(self);
        let delay = self.analysis_delay;
        let handle = tokio::spawn(async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            engine.evaluate(&request)
        });
        PendingRecommendation { handle }
    }

    pub fn fertilizer_plan(
        &self,
        crop_name: &str,
        stage: GrowthStage,
        soil_type: SoilType,
        land_area_ha: f64,
    ) -> Result<StagePlan> {
        fertilizer::plan(crop_name, stage, soil_type, land_area_ha)
    }

    pub fn irrigation(&self, crop_name: &str) -> Result<IrrigationPlan> {
        irrigation::schedule(crop_name)
    }

    pub fn classify_pest(&self, sample: Option<&SampleDescriptor>) -> Result<PestFinding> {
        pest::classify(self.classifier.as_ref(), sample)
    }

    pub fn analyze_quote(&self, quote: &MarketQuote) -> Result<TrendAnalysis> {
        market::analyze(quote)
    }
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

/// Handle to a submitted evaluation.
pub struct PendingRecommendation {
    handle: JoinHandle<Result<RecommendationReport>>,
}

impl PendingRecommendation {
    /// Abort the evaluation. A later `wait` yields `Cancelled`.
    pub fn cancel(&self) {
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the report. Call at most once.
    pub async fn wait(&mut self) -> Result<RecommendationReport> {
        match (&mut self.handle).await {
            Ok(result) => result,
            Err(e) if e.is_cancelled() => Err(FarmOpsError::Cancelled),
            Err(e) => std::panic::resume_unwind(e.into_panic()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CropCategory, Season};

    fn request(selection: CropSelection, season: Season, land_area_ha: f64) -> RecommendationRequest {
        RecommendationRequest {
            selection,
            soil: SoilSample::default(),
            weather: WeatherSnapshot {
                season,
                ..Default::default()
            },
            land_area_ha,
        }
    }

    fn engine(delay_ms: u64) -> Arc<RecommendationEngine> {
        Arc::new(RecommendationEngine::default().with_analysis_delay(Duration::from_millis(delay_ms)))
    }

    #[test]
    fn report_carries_totals_for_land_area() {
        let engine = RecommendationEngine::default();
        let req = request(
            CropSelection::Category(CropCategory::Cereals),
            Season::Monsoon,
            2.0,
        );
        let report = engine.evaluate(&req).unwrap();
        assert_eq!(report.recommendations.len(), 2);
        let rice = &report.recommendations[0];
        assert_eq!(rice.recommendation.crop_name, "Rice");
        assert_eq!(
            rice.total_dose.nitrogen_kg,
            rice.recommendation.fertilizer.nitrogen * 2.0
        );
        assert_eq!(rice.total_dose.land_area_ha, 2.0);
    }

    #[test]
    fn identical_requests_serialize_identically() {
        let engine = RecommendationEngine::default();
        let req = request(
            CropSelection::Category(CropCategory::Fruits),
            Season::Summer,
            1.5,
        );
        let a = serde_json::to_string(&engine.evaluate(&req).unwrap()).unwrap();
        let b = serde_json::to_string(&engine.evaluate(&req).unwrap()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn build_request_uses_configured_baseline() {
        let mut config = Config::default();
        config.baseline.land_area = 3.0;
        let engine = RecommendationEngine::new(&config);
        let raw = RawRecommendationInput {
            category: "vegetables".into(),
            ..Default::default()
        };
        let req = engine.build_request(&raw).unwrap();
        assert_eq!(req.land_area_ha, 3.0);
        assert_eq!(engine.analysis_delay(), Duration::from_millis(3000));
    }

    #[test]
    fn forwarders_reach_components() {
        let engine = RecommendationEngine::default();
        let plan = engine
            .fertilizer_plan("rice", GrowthStage::Planting, SoilType::Alluvial, 2.0)
            .unwrap();
        assert_eq!(plan.totals.nitrogen_kg, 120.0);
        assert_eq!(engine.irrigation("rice").unwrap(), plan.irrigation);
        assert!(matches!(
            engine.classify_pest(None),
            Err(FarmOpsError::MissingSample)
        ));
        let analysis = engine
            .analyze_quote(&MarketQuote::new("Rice", 2850, 2720))
            .unwrap();
        assert_eq!(analysis.delta, 130);
    }

    #[tokio::test]
    async fn submitted_request_completes() {
        let engine = engine(0);
        let req = request(
            CropSelection::Custom("Quinoa".into()),
            Season::Winter,
            1.0,
        );
        let report = engine.submit(req).wait().await.unwrap();
        assert_eq!(report.recommendations.len(), 1);
        assert_eq!(report.recommendations[0].recommendation.confidence, 85);
    }

    #[tokio::test]
    async fn submitted_error_is_propagated() {
        let engine = engine(0);
        let req = request(
            CropSelection::Category(CropCategory::Other),
            Season::Monsoon,
            1.0,
        );
        assert!(matches!(
            engine.submit(req).wait().await,
            Err(FarmOpsError::MissingCropName)
        ));
    }

    #[tokio::test]
    async fn cancelled_request_yields_cancelled() {
        let engine = engine(60_000);
        let req = request(
            CropSelection::Category(CropCategory::Cereals),
            Season::Monsoon,
            1.0,
        );
        let mut pending = engine.submit(req);
        pending.cancel();
        assert!(matches!(pending.wait().await, Err(FarmOpsError::Cancelled)));
    }

    #[tokio::test]
    async fn concurrent_requests_are_isolated() {
        let engine = engine(10);
        let monsoon = request(
            CropSelection::Category(CropCategory::Cereals),
            Season::Monsoon,
            1.0,
        );
        let winter = request(
            CropSelection::Category(CropCategory::Cereals),
            Season::Winter,
            4.0,
        );

        let mut first = engine.submit(monsoon.clone());
        let mut second = engine.submit(winter.clone());
        let (a, b) = tokio::join!(first.wait(), second.wait());
        let (a, b) = (a.unwrap(), b.unwrap());

        assert_eq!(a, engine.evaluate(&monsoon).unwrap());
        assert_eq!(b, engine.evaluate(&winter).unwrap());
        assert_eq!(a.recommendations[0].recommendation.crop_name, "Rice");
        assert_eq!(b.recommendations[0].recommendation.crop_name, "Wheat");
        assert_eq!(b.recommendations[0].total_dose.land_area_ha, 4.0);
    }
}
