//! API response envelope
//!
//! Every endpoint responds with the same wrapper:
//! - success: true for committed operations, false otherwise
//! - message: short human-readable description
//! - data: payload (omitted on failure)

use serde::Serialize;
use utoipa::ToSchema;

/// Unified API response wrapper
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    /// true for success, false for any failure
    #[schema(example = true)]
    pub success: bool,
    /// Response message
    #[schema(example = "ok")]
    pub message: String,
    /// Response data (only present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create success response
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }

    /// Create error response
    pub fn error(message: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            message: message.into(),
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_shape() {
        let resp = ApiResponse::success("Donor added successfully", 42);
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Donor added successfully");
        assert_eq!(json["data"], 42);
    }

    #[test]
    fn test_error_envelope_omits_data() {
        let resp = ApiResponse::<()>::error("Book not found");
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["success"], false);
        assert!(json.get("data").is_none());
    }
}
