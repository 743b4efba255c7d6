//! Standardized API response envelope.
//!
//! Successful calls return [`ApiResponse`], failed calls return
//! [`ErrorResponse`]; clients tell them apart by the `success` flag.

use serde::{Deserialize, Serialize};

/// Stable error codes carried by [`ErrorResponse::code`].
pub mod codes {
    pub const BAD_REQUEST: &str = "COMMON-001";
    pub const INVALID_PARAMETER: &str = "COMMON-002";
    pub const INTERNAL_SERVER_ERROR: &str = "COMMON-003";
    pub const POST_NOT_FOUND: &str = "POST-002";
    pub const POST_VALIDATION_FAILED: &str = "POST-004";
    pub const UNAUTHORIZED_ACCESS: &str = "POST-005";
}

/// Standard successful API response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    /// Success without a payload.
    pub fn empty() -> Self {
        Self {
            success: true,
            data: None,
        }
    }
}

/// Failure envelope, shaped after RFC 7807 Problem Details plus a stable
/// error code.
///
/// See: https://datatracker.ietf.org/doc/html/rfc7807
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Always `false`.
    pub success: bool,

    /// A URI reference that identifies the problem type.
    #[serde(rename = "type")]
    pub error_type: String,

    /// A short, human-readable summary of the problem type.
    pub title: String,

    /// The HTTP status code.
    pub status: u16,

    /// Stable machine-readable error code, see [`codes`].
    pub code: String,

    /// A human-readable explanation specific to this occurrence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ErrorResponse {
    pub fn new(status: u16, code: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            success: false,
            error_type: "about:blank".to_string(),
            title: title.into(),
            status,
            code: code.into(),
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    // Common error constructors
    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new(400, codes::BAD_REQUEST, "Invalid request.").with_detail(detail)
    }

    pub fn invalid_parameter(detail: impl Into<String>) -> Self {
        Self::new(400, codes::INVALID_PARAMETER, "Invalid request parameter.").with_detail(detail)
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new(404, codes::POST_NOT_FOUND, "Post not found.").with_detail(detail)
    }

    pub fn validation_failed(detail: impl Into<String>) -> Self {
        Self::new(
            400,
            codes::POST_VALIDATION_FAILED,
            "Failed to create post. Check the input values.",
        )
        .with_detail(detail)
    }

    pub fn forbidden() -> Self {
        Self::new(403, codes::UNAUTHORIZED_ACCESS, "Access denied.")
    }

    pub fn internal_error() -> Self {
        Self::new(500, codes::INTERNAL_SERVER_ERROR, "Internal server error.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_success_serializes_null_data() {
        let json = serde_json::to_value(ApiResponse::empty()).unwrap();
        assert_eq!(json, serde_json::json!({ "success": true, "data": null }));
    }

    #[test]
    fn test_error_envelope_shape() {
        let json = serde_json::to_value(ErrorResponse::not_found("Post with id 3 not found")).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["status"], 404);
        assert_eq!(json["code"], "POST-002");
        assert_eq!(json["type"], "about:blank");
    }

    #[test]
    fn test_envelopes_carry_only_their_fields() {
        let ok = serde_json::to_value(ApiResponse::ok(7)).unwrap();
        assert_eq!(ok, serde_json::json!({ "success": true, "data": 7 }));

        let err = serde_json::to_value(ErrorResponse::internal_error()).unwrap();
        let mut keys: Vec<&str> = err.as_object().unwrap().keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["code", "status", "success", "title", "type"]);
    }
}
