use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendOtpRequest {
    pub receiver_email: String,
    pub reminder_message: String,
    pub reminder_time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyOtpRequest {
    pub receiver_email: String,
    pub reminder_message: String,
    pub reminder_time: String,
    pub otp: String,
}

/// Body returned by both OTP endpoints. A missing `success` flag reads as a failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpResponse {
    #[serde(default, deserialize_with = "truthy")]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl OtpResponse {
    pub fn into_result(self, fallback: &str) -> Result<Self, ApiError> {
        if self.success {
            Ok(self)
        } else {
            Err(ApiError::rejected(
                non_empty(self.message).unwrap_or_else(|| fallback.to_string()),
            ))
        }
    }
}

// `null`, `0`, `""` and `false` are falsy; any other value counts as set.
fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => false,
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    })
}

/// Error body sent with non-ok statuses. Only `message` is read.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNKNOWN".to_string(),
            details: None,
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REQUEST_FAILED".to_string(),
            details: None,
        }
    }

    /// Transport-level failure: the request never produced a response.
    pub fn transport(err: impl std::fmt::Display) -> Self {
        Self::request_failed(format!("Request failed: {}", err))
    }

    pub fn http_status(status: u16, msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "HTTP_ERROR".to_string(),
            details: Some(serde_json::json!({ "status": status })),
        }
    }

    pub fn rejected(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REJECTED".to_string(),
            details: None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        self.details
            .as_ref()
            .and_then(|d| d.get("status"))
            .and_then(Value::as_u64)
            .and_then(|s| u16::try_from(s).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn otp_response_without_success_flag_is_failure() {
        let resp: OtpResponse = serde_json::from_value(json!({})).unwrap();
        assert!(!resp.success);
        let err = resp.into_result("Unknown error").expect_err("should fail");
        assert_eq!(err.error, "Unknown error");
        assert_eq!(err.code, "REJECTED");
    }

    #[test]
    fn otp_response_null_success_keeps_server_message() {
        let resp: OtpResponse = serde_json::from_value(
            json!({ "success": null, "message": "Invalid or expired OTP" }),
        )
        .unwrap();
        assert!(!resp.success);
        let err = resp.into_result("Invalid OTP").expect_err("should fail");
        assert_eq!(err.error, "Invalid or expired OTP");
    }

    #[test]
    fn otp_response_success_follows_truthiness() {
        let parse =
            |v: Value| serde_json::from_value::<OtpResponse>(json!({ "success": v })).unwrap();
        assert!(!parse(json!(0)).success);
        assert!(!parse(json!("")).success);
        assert!(!parse(json!(false)).success);
        assert!(parse(json!(1)).success);
        assert!(parse(json!("yes")).success);
        assert!(parse(json!({})).success);
    }

    #[test]
    fn otp_response_prefers_server_message() {
        let resp: OtpResponse =
            serde_json::from_value(json!({ "success": false, "message": "Invalid or expired OTP" }))
                .unwrap();
        let err = resp.into_result("Invalid OTP").expect_err("should fail");
        assert_eq!(err.error, "Invalid or expired OTP");
    }

    #[test]
    fn otp_response_empty_message_uses_fallback() {
        let resp = OtpResponse {
            success: false,
            message: Some(String::new()),
        };
        let err = resp.into_result("Invalid OTP").expect_err("should fail");
        assert_eq!(err.error, "Invalid OTP");
    }

    #[test]
    fn otp_response_success_passes_through() {
        let resp: OtpResponse = serde_json::from_value(json!({ "success": true })).unwrap();
        assert!(resp.into_result("unused").is_ok());
    }

    #[test]
    fn verify_request_serializes_snake_case_fields() {
        let body = serde_json::to_value(VerifyOtpRequest {
            receiver_email: "a@b.com".into(),
            reminder_message: "Pay bill".into(),
            reminder_time: "2024-01-01T10:00".into(),
            otp: "123456".into(),
        })
        .unwrap();
        assert_eq!(
            body,
            json!({
                "receiver_email": "a@b.com",
                "reminder_message": "Pay bill",
                "reminder_time": "2024-01-01T10:00",
                "otp": "123456"
            })
        );
    }

    #[test]
    fn api_error_helpers_set_codes() {
        let unknown = ApiError::unknown("x");
        assert_eq!(unknown.code, "UNKNOWN");
        assert!(unknown.details.is_none());
        assert_eq!(ApiError::request_failed("network error").code, "REQUEST_FAILED");
        let transport = ApiError::transport("connection refused");
        assert_eq!(transport.code, "REQUEST_FAILED");
        assert_eq!(transport.error, "Request failed: connection refused");

        let http = ApiError::http_status(400, "Missing required fields");
        assert_eq!(http.code, "HTTP_ERROR");
        assert_eq!(http.status(), Some(400));
        assert_eq!(http.to_string(), "Missing required fields");
    }
}
