//! Tests for the API client: URL building, status mapping and body decoding.

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use reqwest::{Method, StatusCode, header};
    use serde_json::{Value, json};
    use shared::models::{PredictionOutcome, StudentFeatures, SubmissionsResponse};
    use test_case::test_case;

    use crate::api::{ApiError, DropwatchClient, parse_response, status_error};

    fn client() -> DropwatchClient {
        DropwatchClient::new("http://localhost:8000/", Duration::from_millis(5_000))
    }

    #[test_case("api/students/predict", "http://localhost:8000/api/students/predict" ; "relative")]
    #[test_case("/auth/me", "http://localhost:8000/auth/me" ; "leading slash")]
    fn api_url_joins_once(path: &str, expected: &str) {
        assert_eq!(client().api_url(path), expected);
    }

    #[test]
    fn timeout_is_kept() {
        assert_eq!(client().timeout(), Duration::from_millis(5_000));
    }

    fn json_body(request: &reqwest::Request) -> Value {
        let bytes = request
            .body()
            .and_then(reqwest::Body::as_bytes)
            .expect("buffered body");
        serde_json::from_slice(bytes).unwrap()
    }

    #[test]
    fn predict_posts_features_as_json() {
        let features = StudentFeatures {
            age: 19,
            attendance: 82.5,
            grades: 71.0,
            parent_support: 1,
        };
        let request = client().predict_request(&features).build().unwrap();
        assert_eq!(request.method(), Method::POST);
        assert_eq!(
            request.url().as_str(),
            "http://localhost:8000/api/students/predict"
        );
        assert_eq!(
            json_body(&request),
            json!({"age": 19, "attendance": 82.5, "grades": 71.0, "parent_support": 1})
        );
    }

    #[test_case(50 ; "default page")]
    #[test_case(100 ; "submissions page")]
    fn submissions_carry_the_limit(limit: u32) {
        let request = client().submissions_request(limit).build().unwrap();
        assert_eq!(request.method(), Method::GET);
        assert_eq!(
            request.url().as_str(),
            format!("http://localhost:8000/api/admin/submissions?limit={limit}")
        );
    }

    #[test]
    fn me_sends_the_bearer_token() {
        let request = client().me_request("a.b.c").build().unwrap();
        assert_eq!(request.method(), Method::GET);
        assert_eq!(request.url().as_str(), "http://localhost:8000/auth/me");
        assert_eq!(
            request.headers().get(header::AUTHORIZATION).unwrap(),
            "Bearer a.b.c"
        );
    }

    #[test]
    fn password_reset_requests() {
        let forgot = client()
            .forgot_password_request("  ada@example.com ")
            .build()
            .unwrap();
        assert_eq!(forgot.method(), Method::POST);
        assert_eq!(
            forgot.url().as_str(),
            "http://localhost:8000/auth/forgot-password"
        );
        assert_eq!(json_body(&forgot), json!({"email": "ada@example.com"}));

        let reset = client()
            .reset_password_request("tok", "secret1")
            .build()
            .unwrap();
        assert_eq!(
            reset.url().as_str(),
            "http://localhost:8000/auth/reset-password"
        );
        assert_eq!(json_body(&reset)["token"], "tok");
    }

    #[test]
    fn verdict_body_decodes() {
        let body = json!({"dropout_prediction": true, "probability": 0.82}).to_string();
        let outcome: PredictionOutcome = parse_response(StatusCode::OK, &body).unwrap();
        let result = outcome.into_result().unwrap();
        assert!(result.dropout_prediction);
        assert_eq!(result.probability, Some(0.82));
    }

    #[test]
    fn model_missing_is_a_backend_error() {
        let body = json!({"error": "Model not found. Train it first."}).to_string();
        let outcome: PredictionOutcome = parse_response(StatusCode::OK, &body).unwrap();
        assert_eq!(
            outcome.into_result().unwrap_err(),
            "Model not found. Train it first."
        );
    }

    #[test]
    fn rejected_payload_carries_backend_detail() {
        let body = json!({"detail": "age must be positive"}).to_string();
        let err = parse_response::<PredictionOutcome>(StatusCode::UNPROCESSABLE_ENTITY, &body)
            .unwrap_err();
        assert_eq!(err.status(), Some(StatusCode::UNPROCESSABLE_ENTITY));
        assert_eq!(
            err.user_message("Prediction"),
            "Prediction failed: age must be positive"
        );
    }

    #[test_case("", "Internal Server Error" ; "empty body")]
    #[test_case("<html>oops</html>", "Internal Server Error" ; "html body")]
    #[test_case("database offline", "database offline" ; "plain text")]
    fn status_detail_fallbacks(body: &str, expected: &str) {
        match status_error(StatusCode::INTERNAL_SERVER_ERROR, body) {
            ApiError::Status { detail, .. } => assert_eq!(detail, expected),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn malformed_success_body_is_a_decode_error() {
        let err = parse_response::<SubmissionsResponse>(StatusCode::OK, "not json").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
        assert_eq!(err.status(), None);
    }

    #[test]
    fn missing_submissions_field_reads_as_empty() {
        let response: SubmissionsResponse = parse_response(StatusCode::OK, "{}").unwrap();
        assert!(response.submissions.is_empty());
    }

    #[test]
    fn timeout_message() {
        let err = ApiError::Timeout(Duration::from_millis(5_000));
        assert_eq!(err.to_string(), "request timed out after 5000 ms");
        assert!(err.user_message("Loading submissions").contains("took too long"));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use std::time::Duration;

    use futures::future::{pending, ready};
    use wasm_bindgen_test::*;

    use crate::api::{ApiError, DropwatchClient};

    wasm_bindgen_test_configure!(run_in_browser);

    fn client(timeout_ms: u64) -> DropwatchClient {
        DropwatchClient::new("http://localhost:8000", Duration::from_millis(timeout_ms))
    }

    #[wasm_bindgen_test]
    async fn stalled_request_hits_the_deadline() {
        let result = client(1)
            .with_deadline(pending::<Result<(), reqwest::Error>>())
            .await;
        match result {
            Err(ApiError::Timeout(after)) => assert_eq!(after, Duration::from_millis(1)),
            other => panic!("expected a timeout, got {other:?}"),
        }
    }

    #[wasm_bindgen_test]
    async fn prompt_request_beats_the_deadline() {
        let result = client(5_000)
            .with_deadline(ready(Ok::<_, reqwest::Error>(7)))
            .await;
        assert_eq!(result.unwrap(), 7);
    }
}
