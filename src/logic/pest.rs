use super::tables::pests::{common_pests, REFERENCE_FINDING};
use crate::error::{FarmOpsError, Result};
use crate::models::{CommonPest, PestFinding, SampleDescriptor};

/// Trait for pest classifiers. Implementations must return a complete
/// finding: confidence within 0-100 and every list populated.
pub trait PestClassifier: Send + Sync {
    /// Unique identifier for this classifier
    fn id(&self) -> &'static str;

    fn identify(&self, sample: &SampleDescriptor) -> PestFinding;
}

/// Fixed lookup returning the canonical finding for any sample.
pub struct ReferenceClassifier;

impl PestClassifier for ReferenceClassifier {
    fn id(&self) -> &'static str {
        "reference"
    }

    fn identify(&self, _sample: &SampleDescriptor) -> PestFinding {
        REFERENCE_FINDING.to_finding()
    }
}

/// Classify a submitted sample. A missing or blank sample is rejected rather
/// than answered with a zero-confidence finding.
pub fn classify(
    classifier: &dyn PestClassifier,
    sample: Option<&SampleDescriptor>,
) -> Result<PestFinding> {
    let sample = match sample {
        Some(s) if !s.source.trim().is_empty() => s,
        _ => return Err(FarmOpsError::MissingSample),
    };

    let finding = classifier.identify(sample);
    tracing::debug!(
        "Classifier '{}' found {} ({}%, {}) in {}",
        classifier.id(),
        finding.pest_name,
        finding.confidence,
        finding.severity,
        sample.source
    );

    if !finding.is_complete() {
        return Err(FarmOpsError::validation(
            "pest_finding",
            format!("classifier '{}' returned an incomplete finding", classifier.id()),
        ));
    }

    Ok(finding)
}

/// Common pests known to attack the given crop.
pub fn pests_for_crop(crop: &str) -> Vec<CommonPest> {
    let crop = crop.trim().to_lowercase();
    common_pests()
        .into_iter()
        .filter(|p| p.crops.iter().any(|c| c.to_lowercase() == crop))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Severity;

    struct EmptyClassifier;

    impl PestClassifier for EmptyClassifier {
        fn id(&self) -> &'static str {
            "empty"
        }

        fn identify(&self, _sample: &SampleDescriptor) -> PestFinding {
            PestFinding {
                pest_name: "Unknown".into(),
                confidence: 0,
                severity: Severity::Low,
                remedies: Vec::new(),
                organic_solutions: Vec::new(),
                preventive_measures: Vec::new(),
            }
        }
    }

    #[test]
    fn reference_classifier_returns_canonical_finding() {
        let sample = SampleDescriptor::new("leaf.jpg", "rice");
        let finding = classify(&ReferenceClassifier, Some(&sample)).unwrap();
        assert_eq!(finding.pest_name, "Brown Plant Hopper");
        assert_eq!(finding.confidence, 87);
        assert_eq!(finding.severity, Severity::Medium);
        assert!(!finding.remedies.is_empty());
        assert!(!finding.organic_solutions.is_empty());
        assert!(!finding.preventive_measures.is_empty());
    }

    #[test]
    fn missing_sample_is_an_error() {
        assert!(matches!(
            classify(&ReferenceClassifier, None),
            Err(FarmOpsError::MissingSample)
        ));
        let blank = SampleDescriptor::new("  ", "rice");
        assert!(matches!(
            classify(&ReferenceClassifier, Some(&blank)),
            Err(FarmOpsError::MissingSample)
        ));
    }

    #[test]
    fn incomplete_finding_is_rejected() {
        let sample = SampleDescriptor::new("leaf.jpg", "rice");
        let err = classify(&EmptyClassifier, Some(&sample)).unwrap_err();
        assert!(matches!(err, FarmOpsError::Validation { .. }));
    }

    #[test]
    fn pests_for_rice() {
        let names: Vec<_> = pests_for_crop("Rice").into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["Aphids", "Brown Plant Hopper", "Stem Borer"]);
        assert!(pests_for_crop("mango").is_empty());
    }
}
