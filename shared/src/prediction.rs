use derive_more::From;
use serde::{Deserialize, Deserializer, Serialize};
use strum_macros::EnumString;

/// Successful response body of the analysis endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    /// Ranked by descending confidence. Only the head is displayed today,
    /// the rest is kept so nothing the service sent is dropped.
    pub predictions: Vec<Prediction>,
    pub user_inputs: UserInputs,
    pub recommendations: Vec<String>,
}

impl PredictionResult {
    pub fn top_prediction(&self) -> Option<&Prediction> {
        self.predictions.first()
    }

    pub fn alternatives(&self) -> &[Prediction] {
        self.predictions.get(1..).unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    pub diagnosis: String,
    pub risk_level: RiskLevel,
    pub probability: Probability,
    pub description: String,
    pub treatments: Vec<String>,
}

/// The form values as the service saw them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UserInputs {
    #[serde(deserialize_with = "text_or_number")]
    pub age: String,
    #[serde(deserialize_with = "text_or_number")]
    pub sex: String,
    #[serde(deserialize_with = "text_or_number")]
    pub localization: String,
}

#[derive(Debug, Clone, PartialEq, Eq, EnumString, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
#[strum(ascii_case_insensitive)]
pub enum RiskLevel {
    Low,
    #[strum(serialize = "Low to Medium")]
    LowToMedium,
    Medium,
    #[strum(serialize = "Medium to High")]
    MediumToHigh,
    High,
    #[strum(serialize = "Very High")]
    VeryHigh,
    #[strum(default)]
    Other(String),
}

impl RiskLevel {
    pub fn label(&self) -> &str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::LowToMedium => "Low to Medium",
            RiskLevel::Medium => "Medium",
            RiskLevel::MediumToHigh => "Medium to High",
            RiskLevel::High => "High",
            RiskLevel::VeryHigh => "Very High",
            RiskLevel::Other(label) => label,
        }
    }

    /// Badge classes: the lower-cased label plus `-risk`, so `Very High`
    /// yields the two classes `very` and `high-risk`.
    pub fn css_class(&self) -> String {
        format!("{}-risk", self.label().to_lowercase())
    }
}

impl From<String> for RiskLevel {
    fn from(label: String) -> Self {
        label
            .trim()
            .parse()
            .unwrap_or(RiskLevel::Other(label))
    }
}

impl From<RiskLevel> for String {
    fn from(level: RiskLevel) -> Self {
        level.label().to_string()
    }
}

/// Model confidence as reported by the service. Nominally in `[0, 1]`,
/// but nothing upstream enforces that.
#[derive(Debug, Clone, Copy, PartialEq, From, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Probability(f64);

impl Probability {
    pub fn value(self) -> f64 {
        self.0
    }

    pub fn is_anomalous(self) -> bool {
        !(0.0..=1.0).contains(&self.0)
    }

    pub fn clamped(self) -> f64 {
        if self.0.is_nan() {
            0.0
        } else {
            self.0.clamp(0.0, 1.0)
        }
    }

    pub fn percent(self) -> f64 {
        self.clamped() * 100.0
    }
}

fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Echo {
        Text(String),
        Integer(i64),
        Float(f64),
    }

    Ok(match Echo::deserialize(deserializer)? {
        Echo::Text(text) => text,
        Echo::Integer(n) => n.to_string(),
        Echo::Float(n) => n.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "predictions": [
            {
                "diagnosis": "Basal Cell Carcinoma",
                "probability": 0.73,
                "riskLevel": "High",
                "description": "The most common type of skin cancer.",
                "treatments": ["Surgery", "Cryotherapy"]
            },
            {
                "diagnosis": "Melanocytic Nevi",
                "probability": 0.2,
                "riskLevel": "Low to Medium",
                "description": "Common benign moles.",
                "treatments": ["Regular monitoring"]
            }
        ],
        "userInputs": { "age": "45", "sex": "female", "localization": "upper_extremity" },
        "recommendations": ["A", "B"]
    }"#;

    #[test]
    fn parses_service_response() {
        let result: PredictionResult = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(result.predictions.len(), 2);
        assert_eq!(result.user_inputs.age, "45");
        assert_eq!(result.user_inputs.localization, "upper_extremity");
        assert_eq!(result.recommendations, vec!["A", "B"]);

        let top = result.top_prediction().unwrap();
        assert_eq!(top.diagnosis, "Basal Cell Carcinoma");
        assert_eq!(top.risk_level, RiskLevel::High);
        assert_eq!(top.probability.value(), 0.73);
        assert_eq!(top.treatments, vec!["Surgery", "Cryotherapy"]);
    }

    #[test]
    fn keeps_lower_ranked_predictions() {
        let result: PredictionResult = serde_json::from_str(SAMPLE).unwrap();
        let rest = result.alternatives();
        assert_eq!(rest.len(), 1);
        assert_eq!(rest[0].risk_level, RiskLevel::LowToMedium);
    }

    #[test]
    fn empty_predictions_have_no_top() {
        let json = r#"{"predictions": [], "userInputs": {"age": 30, "sex": "male", "localization": "back"}, "recommendations": []}"#;
        let result: PredictionResult = serde_json::from_str(json).unwrap();
        assert!(result.top_prediction().is_none());
        assert!(result.alternatives().is_empty());
        assert_eq!(result.user_inputs.age, "30");
    }

    #[test]
    fn rejects_body_missing_required_sections() {
        let json = r#"{"predictions": []}"#;
        assert!(serde_json::from_str::<PredictionResult>(json).is_err());
        assert!(serde_json::from_str::<PredictionResult>("model unavailable").is_err());
    }

    #[test]
    fn risk_badge_class_is_lowercased_label() {
        assert_eq!(RiskLevel::High.css_class(), "high-risk");
        assert_eq!(RiskLevel::Low.css_class(), "low-risk");
        assert_eq!(RiskLevel::VeryHigh.css_class(), "very high-risk");
        assert_eq!(RiskLevel::MediumToHigh.css_class(), "medium to high-risk");
        assert_eq!(RiskLevel::LowToMedium.css_class(), "low to medium-risk");
    }

    #[test]
    fn multi_word_levels_share_the_single_word_class() {
        for level in [RiskLevel::VeryHigh, RiskLevel::MediumToHigh] {
            let class = level.css_class();
            assert!(class.split_whitespace().any(|token| token == "high-risk"), "{class}");
        }
        let class = RiskLevel::LowToMedium.css_class();
        assert!(class.split_whitespace().any(|token| token == "medium-risk"), "{class}");
    }

    #[test]
    fn unknown_risk_labels_are_preserved() {
        let level = RiskLevel::from("Critical".to_string());
        assert_eq!(level, RiskLevel::Other("Critical".to_string()));
        assert_eq!(level.label(), "Critical");
        assert_eq!(level.css_class(), "critical-risk");
        assert_eq!(
            RiskLevel::from("Extremely High".to_string()).css_class(),
            "extremely high-risk"
        );
    }

    #[test]
    fn risk_labels_parse_case_insensitively() {
        assert_eq!(RiskLevel::from("high".to_string()), RiskLevel::High);
        assert_eq!(RiskLevel::from("very high".to_string()), RiskLevel::VeryHigh);
        assert_eq!(String::from(RiskLevel::MediumToHigh), "Medium to High");
    }

    #[test]
    fn probability_clamps_out_of_range_values() {
        assert!(!Probability::from(0.73).is_anomalous());
        assert!(Probability::from(1.4).is_anomalous());
        assert!(Probability::from(-0.1).is_anomalous());
        assert!(Probability::from(f64::NAN).is_anomalous());

        assert_eq!(Probability::from(1.4).clamped(), 1.0);
        assert_eq!(Probability::from(-0.1).clamped(), 0.0);
        assert_eq!(Probability::from(f64::NAN).clamped(), 0.0);
        assert_eq!(Probability::from(0.5).percent(), 50.0);
    }
}
