use crate::api::{ApiClient, ApiError, SendOtpRequest, VerifyOtpRequest};
use std::rc::Rc;

/// Used when an ok response says `success: false` without a message.
pub const SEND_OTP_REJECTED: &str = "Unknown error";
pub const VERIFY_OTP_REJECTED: &str = "Invalid OTP";

#[derive(Clone)]
pub struct ReminderRepository {
    client: Rc<ApiClient>,
}

impl ReminderRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn send_otp(&self, request: &SendOtpRequest) -> Result<(), ApiError> {
        self.client
            .send_otp(request)
            .await?
            .into_result(SEND_OTP_REJECTED)
            .map(|_| ())
    }

    pub async fn verify_otp(&self, request: &VerifyOtpRequest) -> Result<(), ApiError> {
        self.client
            .verify_otp(request)
            .await?
            .into_result(VERIFY_OTP_REJECTED)
            .map(|_| ())
    }
}
