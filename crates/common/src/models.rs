//! Response payloads returned by the Verify SDK endpoints.

use serde::{Deserialize, Serialize};

/// Fields shared by every endpoint response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ResultStatus {
    pub result_code: i64,
    #[serde(default)]
    pub result_message: String,
    #[serde(default)]
    pub timestamp: String,
}

impl ResultStatus {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.result_code == 0
    }
}

/// Body of the token endpoint response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct TokenResponse {
    #[serde(flatten)]
    pub status: ResultStatus,
    #[serde(default)]
    pub token: String,
}

/// Body of the verify search endpoint response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SearchResponse {
    #[serde(flatten)]
    pub status: ResultStatus,
    #[serde(default)]
    pub user_status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_response_deserialize() {
        let json = r#"{
            "result_code": 0,
            "result_message": "OK",
            "timestamp": "1465215221",
            "token": "a2b4c6&d=e,f"
        }"#;

        let response: TokenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.status.result_code, 0);
        assert_eq!(response.status.result_message, "OK");
        assert_eq!(response.status.timestamp, "1465215221");
        assert_eq!(response.token, "a2b4c6&d=e,f");
        assert!(response.status.is_success());
    }

    #[test]
    fn test_token_error_response_without_token() {
        let json = r#"{"result_code": 51, "result_message": "Invalid source IP address", "timestamp": "1465215221"}"#;

        let response: TokenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.status.result_code, 51);
        assert!(response.token.is_empty());
        assert!(!response.status.is_success());
    }

    #[test]
    fn test_search_response_deserialize() {
        let json = r#"{
            "result_code": 0,
            "result_message": "OK",
            "timestamp": "1465215221",
            "user_status": "unknown"
        }"#;

        let response: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.status.result_code, 0);
        assert_eq!(response.user_status, "unknown");
    }

    #[test]
    fn test_search_response_requires_result_code() {
        let json = r#"{"result_message": "OK", "user_status": "verified"}"#;

        let result: Result<SearchResponse, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_search_response_serializes_flat() {
        let response = SearchResponse {
            status: ResultStatus {
                result_code: 0,
                result_message: "OK".into(),
                timestamp: "1".into(),
            },
            user_status: "verified".into(),
        };

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["result_code"], 0);
        assert_eq!(value["user_status"], "verified");
        assert!(value.get("status").is_none());
    }
}
