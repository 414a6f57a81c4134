//! Recommendation text generation

use crate::validation::ValidatedFormInput;
use async_trait::async_trait;

const OPENING: &str = "Based on your information, I recommend considering a PPO plan with a \
moderate deductible. This type of plan would provide flexibility in choosing healthcare \
providers while maintaining reasonable costs.";
const DENTAL_CLAUSE: &str = "I've also included dental coverage options in the recommendation.";
const CLOSING: &str =
    "For more specific recommendations, please consult with a healthcare advisor.";

/// Source of the recommendation shown once a submission completes
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecommendationEngine: Send + Sync {
    /// Produce the recommendation for a validated submission
    async fn recommend(&self, input: &ValidatedFormInput) -> String;
}

/// Fixed template keyed only on the dental preference
#[derive(Debug, Clone, Copy, Default)]
pub struct CannedRecommendation;

impl CannedRecommendation {
    pub fn compose(input: &ValidatedFormInput) -> String {
        if input.dental_plan_required().is_required() {
            format!("{OPENING} {DENTAL_CLAUSE} {CLOSING}")
        } else {
            format!("{OPENING} {CLOSING}")
        }
    }
}

#[async_trait]
impl RecommendationEngine for CannedRecommendation {
    async fn recommend(&self, input: &ValidatedFormInput) -> String {
        Self::compose(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::test_support::validated_input;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_without_dental_matches_base_text() {
        let text = CannedRecommendation::compose(&validated_input("no"));
        assert_eq!(
            text,
            "Based on your information, I recommend considering a PPO plan with a moderate \
             deductible. This type of plan would provide flexibility in choosing healthcare \
             providers while maintaining reasonable costs. For more specific recommendations, \
             please consult with a healthcare advisor."
        );
        assert!(!text.contains(DENTAL_CLAUSE));
    }

    #[test]
    fn test_dental_clause_sits_before_closing_sentence() {
        let text = CannedRecommendation::compose(&validated_input("yes"));
        let clause_at = text.find(DENTAL_CLAUSE).unwrap();
        let closing_at = text.find(CLOSING).unwrap();
        assert!(clause_at < closing_at);
        assert!(text.starts_with(OPENING));
        assert!(text.ends_with(CLOSING));
    }

    #[tokio::test]
    async fn test_engine_uses_template() {
        let input = validated_input("yes");
        let text = CannedRecommendation.recommend(&input).await;
        assert_eq!(text, CannedRecommendation::compose(&input));
    }
}
