//! The send-then-verify reminder workflow.
//!
//! The controller never touches the DOM. Field access, panel switching, the
//! two trigger buttons and the blocking alert are injected as ports so the
//! workflow runs the same against Leptos signals or in-memory test doubles.

use super::repository::ReminderRepository;
use crate::api::ApiError;
use super::utils::{
    validate_send_input, verify_request, ButtonState, ReminderError, ReminderStep,
    StatusMessage, SuccessCopy, SEND_OTP_LABEL, SENDING_OTP_LABEL, VERIFYING_OTP_LABEL,
    VERIFY_OTP_LABEL,
};
use std::rc::Rc;

pub trait ReminderForm {
    fn receiver_email(&self) -> String;
    fn reminder_message(&self) -> String;
    fn reminder_time(&self) -> String;
    fn otp(&self) -> String;
    fn clear(&self);
}

/// Exactly one step is visible at a time.
pub trait PanelView {
    fn step(&self) -> ReminderStep;
    fn show(&self, step: ReminderStep);
    fn set_success_copy(&self, copy: SuccessCopy);
    fn set_status(&self, status: Option<StatusMessage>);
}

pub trait TriggerButton {
    fn state(&self) -> ButtonState;
    fn set_state(&self, state: ButtonState);
}

pub trait Notifier {
    fn alert(&self, message: &str);
}

/// `window.alert`, or an error log when there is no window.
pub struct BrowserAlert;

impl Notifier for BrowserAlert {
    fn alert(&self, message: &str) {
        match web_sys::window() {
            Some(window) => {
                if window.alert_with_message(message).is_err() {
                    log::error!("alert failed: {}", message);
                }
            }
            None => log::error!("{}", message),
        }
    }
}

fn log_failure(err: &ApiError) {
    match err.status() {
        Some(status) => log::error!("Error: {} (HTTP {})", err, status),
        None => log::error!("Error: {}", err),
    }
}

/// Holds a trigger disabled with its in-flight label; restores the idle
/// state when dropped, whichever way the request ended.
struct InFlight<'a, B: TriggerButton> {
    button: &'a B,
    idle: ButtonState,
}

impl<'a, B: TriggerButton> InFlight<'a, B> {
    fn start(button: &'a B, idle_label: &'static str, busy_label: &'static str) -> Self {
        button.set_state(ButtonState::busy(busy_label));
        Self {
            button,
            idle: ButtonState::idle(idle_label),
        }
    }
}

impl<B: TriggerButton> Drop for InFlight<'_, B> {
    fn drop(&mut self) {
        self.button.set_state(self.idle);
    }
}

pub struct ReminderFormController<F, P, B> {
    repository: ReminderRepository,
    form: F,
    panels: P,
    send_button: B,
    verify_button: B,
    notifier: Rc<dyn Notifier>,
}

impl<F, P, B> ReminderFormController<F, P, B>
where
    F: ReminderForm,
    P: PanelView,
    B: TriggerButton,
{
    pub fn new(
        repository: ReminderRepository,
        form: F,
        panels: P,
        send_button: B,
        verify_button: B,
        notifier: Rc<dyn Notifier>,
    ) -> Self {
        Self {
            repository,
            form,
            panels,
            send_button,
            verify_button,
            notifier,
        }
    }

    pub async fn send_otp(&self) -> Result<(), ReminderError> {
        let request = match validate_send_input(
            self.form.receiver_email(),
            self.form.reminder_message(),
            self.form.reminder_time(),
        ) {
            Ok(request) => request,
            Err(err) => {
                self.notifier.alert(&err.to_string());
                return Err(err);
            }
        };

        let _in_flight = InFlight::start(&self.send_button, SEND_OTP_LABEL, SENDING_OTP_LABEL);
        match self.repository.send_otp(&request).await {
            Ok(()) => {
                log::info!("OTP requested");
                self.panels.show(ReminderStep::Otp);
                self.panels.set_status(None);
                Ok(())
            }
            Err(err) => {
                log_failure(&err);
                self.notifier.alert(&format!("Error: {}", err));
                Err(err.into())
            }
        }
    }

    pub async fn verify_otp(&self) -> Result<(), ReminderError> {
        let request = match verify_request(&self.form) {
            Ok(request) => request,
            Err(err) => {
                self.notifier.alert(&err.to_string());
                return Err(err);
            }
        };

        let _in_flight =
            InFlight::start(&self.verify_button, VERIFY_OTP_LABEL, VERIFYING_OTP_LABEL);
        match self.repository.verify_otp(&request).await {
            Ok(()) => {
                log::info!("Reminder verified and scheduled");
                self.panels.set_success_copy(SuccessCopy::confirmation());
                self.panels.show(ReminderStep::Success);
                Ok(())
            }
            Err(err) => {
                log_failure(&err);
                self.panels
                    .set_status(Some(StatusMessage::error(err.error.clone())));
                Err(err.into())
            }
        }
    }

    pub fn reset_form(&self) {
        self.form.clear();
        self.panels.set_status(None);
        self.panels.show(ReminderStep::Input);
        self.panels.set_success_copy(SuccessCopy::default());
    }

    pub fn step(&self) -> ReminderStep {
        self.panels.step()
    }
}
