use super::controller::{PanelView, ReminderForm, TriggerButton};
use crate::api::{ApiError, SendOtpRequest, VerifyOtpRequest};
use leptos::*;

pub const SEND_OTP_LABEL: &str = "Send OTP";
pub const SENDING_OTP_LABEL: &str = "Sending OTP...";
pub const VERIFY_OTP_LABEL: &str = "Verify & Schedule Reminder";
pub const VERIFYING_OTP_LABEL: &str = "Verifying...";

pub const OTP_LENGTH: usize = 6;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ReminderError {
    #[error("Please fill in all fields")]
    MissingFields,
    #[error("Please enter a valid 6-digit OTP")]
    InvalidOtp,
    #[error("{0}")]
    Remote(#[from] ApiError),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReminderStep {
    #[default]
    Input,
    Otp,
    Success,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuccessCopy {
    pub heading: &'static str,
    pub body: &'static str,
}

impl SuccessCopy {
    pub const fn confirmation() -> Self {
        Self {
            heading: "Thank You!",
            body: "Your reminder has been successfully scheduled.",
        }
    }
}

impl Default for SuccessCopy {
    fn default() -> Self {
        Self {
            heading: "Reminder Scheduled Successfully!",
            body: "Your reminder has been verified and scheduled.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

impl StatusMessage {
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }

    pub fn class(&self) -> &'static str {
        if self.is_error {
            "mt-2 text-sm text-status-error-text"
        } else {
            "mt-2 text-sm text-fg-muted"
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonState {
    pub disabled: bool,
    pub label: &'static str,
}

impl ButtonState {
    pub const fn idle(label: &'static str) -> Self {
        Self {
            disabled: false,
            label,
        }
    }

    pub const fn busy(label: &'static str) -> Self {
        Self {
            disabled: true,
            label,
        }
    }
}

/// Presence check only; whitespace counts as a value.
pub fn validate_send_input(
    receiver_email: String,
    reminder_message: String,
    reminder_time: String,
) -> Result<SendOtpRequest, ReminderError> {
    if receiver_email.is_empty() || reminder_message.is_empty() || reminder_time.is_empty() {
        return Err(ReminderError::MissingFields);
    }
    Ok(SendOtpRequest {
        receiver_email,
        reminder_message,
        reminder_time,
    })
}

pub fn validate_otp(otp: &str) -> Result<(), ReminderError> {
    if otp.chars().count() != OTP_LENGTH {
        return Err(ReminderError::InvalidOtp);
    }
    Ok(())
}

pub fn verify_request(form: &impl ReminderForm) -> Result<VerifyOtpRequest, ReminderError> {
    let otp = form.otp();
    validate_otp(&otp)?;
    Ok(VerifyOtpRequest {
        receiver_email: form.receiver_email(),
        reminder_message: form.reminder_message(),
        reminder_time: form.reminder_time(),
        otp,
    })
}

#[derive(Clone, Copy)]
pub struct ReminderFormState {
    pub receiver_email: RwSignal<String>,
    pub reminder_message: RwSignal<String>,
    pub reminder_time: RwSignal<String>,
    pub otp: RwSignal<String>,
}

impl Default for ReminderFormState {
    fn default() -> Self {
        Self {
            receiver_email: create_rw_signal(String::new()),
            reminder_message: create_rw_signal(String::new()),
            reminder_time: create_rw_signal(String::new()),
            otp: create_rw_signal(String::new()),
        }
    }
}

impl ReminderForm for ReminderFormState {
    fn receiver_email(&self) -> String {
        self.receiver_email.get_untracked()
    }

    fn reminder_message(&self) -> String {
        self.reminder_message.get_untracked()
    }

    fn reminder_time(&self) -> String {
        self.reminder_time.get_untracked()
    }

    fn otp(&self) -> String {
        self.otp.get_untracked()
    }

    fn clear(&self) {
        self.receiver_email.set(String::new());
        self.reminder_message.set(String::new());
        self.reminder_time.set(String::new());
        self.otp.set(String::new());
    }
}

#[derive(Clone, Copy)]
pub struct ReminderPanels {
    pub step: RwSignal<ReminderStep>,
    pub success_copy: RwSignal<SuccessCopy>,
    pub status: RwSignal<Option<StatusMessage>>,
}

impl Default for ReminderPanels {
    fn default() -> Self {
        Self {
            step: create_rw_signal(ReminderStep::Input),
            success_copy: create_rw_signal(SuccessCopy::default()),
            status: create_rw_signal(None),
        }
    }
}

impl ReminderPanels {
    pub fn is_visible(&self, step: ReminderStep) -> bool {
        self.step.get() == step
    }
}

impl PanelView for ReminderPanels {
    fn step(&self) -> ReminderStep {
        self.step.get_untracked()
    }

    fn show(&self, step: ReminderStep) {
        self.step.set(step);
    }

    fn set_success_copy(&self, copy: SuccessCopy) {
        self.success_copy.set(copy);
    }

    fn set_status(&self, status: Option<StatusMessage>) {
        self.status.set(status);
    }
}

#[derive(Clone, Copy)]
pub struct ButtonSignal(pub RwSignal<ButtonState>);

impl ButtonSignal {
    pub fn new(idle_label: &'static str) -> Self {
        Self(create_rw_signal(ButtonState::idle(idle_label)))
    }

    pub fn disabled(&self) -> bool {
        self.0.get().disabled
    }

    pub fn label(&self) -> &'static str {
        self.0.get().label
    }
}

impl TriggerButton for ButtonSignal {
    fn state(&self) -> ButtonState {
        self.0.get_untracked()
    }

    fn set_state(&self, state: ButtonState) {
        self.0.set(state);
    }
}
