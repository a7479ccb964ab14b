pub mod engine;
pub mod fertilizer;
pub mod irrigation;
pub mod market;
pub mod pest;
pub mod scorer;
pub mod tables;
pub mod validator;

pub use engine::{
    PendingRecommendation, RecommendationEngine, RecommendationReport, RecommendationRequest,
};
pub use pest::{PestClassifier, ReferenceClassifier};
pub use validator::ParameterValidator;
