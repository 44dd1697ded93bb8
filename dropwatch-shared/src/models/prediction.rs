use serde::{Deserialize, Serialize};

/// Feature payload sent to `POST /api/students/predict`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct StudentFeatures {
    /// Age in years, 1 to 120.
    pub age: u32,
    /// Attendance percentage, 0 to 100.
    pub attendance: f64,
    /// Grade average, 0 to 100.
    pub grades: f64,
    /// 1 when the student has parental support, else 0.
    pub parent_support: u8,
}

/// Verdict returned by the prediction endpoint.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PredictionResult {
    /// Whether the student is predicted to drop out.
    pub dropout_prediction: bool,
    /// Model confidence, when the backend reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub probability: Option<f64>,
}

impl PredictionResult {
    /// Whether the verdict flags the student as at risk.
    #[must_use]
    pub const fn is_at_risk(&self) -> bool {
        self.dropout_prediction
    }

    /// Headline shown to the user after a prediction.
    #[must_use]
    pub const fn headline(&self) -> &'static str {
        if self.dropout_prediction {
            "At Risk of Dropout"
        } else {
            "Likely to Continue"
        }
    }
}

/// Raw prediction body. The backend answers `200 {"error": ...}` when no
/// model has been trained, so the body is decoded before it is trusted.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum PredictionOutcome {
    /// A verdict.
    Verdict(PredictionResult),
    /// Application error reported with a success status.
    Failed {
        /// Backend message.
        error: String,
    },
}

impl PredictionOutcome {
    /// Convert to a verdict or the backend's error message.
    ///
    /// # Errors
    /// Returns the backend message when no verdict was produced.
    pub fn into_result(self) -> Result<PredictionResult, String> {
        match self {
            Self::Verdict(result) => Ok(result),
            Self::Failed { error } => Err(error),
        }
    }
}

/// A stored prediction request as listed by `GET /api/admin/submissions`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Submission {
    /// Row identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Submitted age.
    pub age: u32,
    /// Submitted attendance.
    pub attendance: f64,
    /// Submitted grades.
    pub grades: f64,
    /// Submitted parental support flag.
    pub parent_support: u8,
    /// Verdict that was returned.
    pub dropout_prediction: bool,
    /// Confidence, if recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub probability: Option<f64>,
    /// Submission time as reported by the backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Envelope for the submissions listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SubmissionsResponse {
    /// Newest first, at most the requested limit.
    #[serde(default)]
    pub submissions: Vec<Submission>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn features_serialize_with_backend_field_names() {
        let features = StudentFeatures {
            age: 19,
            attendance: 72.5,
            grades: 64.0,
            parent_support: 1,
        };
        let value = serde_json::to_value(features).unwrap();
        assert_eq!(
            value,
            json!({"age": 19, "attendance": 72.5, "grades": 64.0, "parent_support": 1})
        );
    }

    #[test]
    fn verdict_without_probability() {
        let outcome: PredictionOutcome =
            serde_json::from_value(json!({"dropout_prediction": true})).unwrap();
        let result = outcome.into_result().unwrap();
        assert!(result.is_at_risk());
        assert_eq!(result.probability, None);
        assert_eq!(result.headline(), "At Risk of Dropout");
    }

    #[test]
    fn verdict_with_probability() {
        let outcome: PredictionOutcome =
            serde_json::from_value(json!({"dropout_prediction": false, "probability": 0.12}))
                .unwrap();
        let result = outcome.into_result().unwrap();
        assert!(!result.is_at_risk());
        assert_eq!(result.probability, Some(0.12));
        assert_eq!(result.headline(), "Likely to Continue");
    }

    #[test]
    fn model_missing_is_an_error() {
        let outcome: PredictionOutcome =
            serde_json::from_value(json!({"error": "Model not found. Train it first."})).unwrap();
        assert_eq!(
            outcome.into_result().unwrap_err(),
            "Model not found. Train it first."
        );
    }

    #[test]
    fn submissions_default_to_empty() {
        let response: SubmissionsResponse = serde_json::from_value(json!({})).unwrap();
        assert!(response.submissions.is_empty());
    }

    #[test]
    fn submissions_parse_rows() {
        let response: SubmissionsResponse = serde_json::from_value(json!({
            "submissions": [
                {"id": 3, "age": 21, "attendance": 40.0, "grades": 35.5, "parent_support": 0,
                 "dropout_prediction": true, "created_at": "2026-03-02T10:00:00"},
                {"age": 18, "attendance": 95.0, "grades": 88.0, "parent_support": 1,
                 "dropout_prediction": false, "probability": 0.08}
            ]
        }))
        .unwrap();
        assert_eq!(response.submissions.len(), 2);
        assert_eq!(response.submissions[0].id, Some(3));
        assert_eq!(response.submissions[1].probability, Some(0.08));
    }
}
