use super::{
    client::ApiClient,
    types::{ApiError, OtpResponse, SendOtpRequest, VerifyOtpRequest},
};

pub const SEND_OTP_FAILED: &str = "Failed to send OTP";
pub const VERIFY_OTP_FAILED: &str = "Verification failed";

impl ApiClient {
    /// Asks the service to email a one-time code for the reminder.
    pub async fn send_otp(&self, request: &SendOtpRequest) -> Result<OtpResponse, ApiError> {
        self.post_json("/send_otp", request, SEND_OTP_FAILED).await
    }

    /// Confirms the code; the service schedules the reminder on success.
    pub async fn verify_otp(&self, request: &VerifyOtpRequest) -> Result<OtpResponse, ApiError> {
        self.post_json("/verify_otp", request, VERIFY_OTP_FAILED)
            .await
    }
}
