use super::{
    controller::{BrowserAlert, Notifier, ReminderFormController},
    repository::ReminderRepository,
    utils::{ButtonSignal, ReminderFormState, ReminderPanels, SEND_OTP_LABEL, VERIFY_OTP_LABEL},
};
use crate::api::ApiClient;
use leptos::*;
use std::rc::Rc;

pub type PageController = ReminderFormController<ReminderFormState, ReminderPanels, ButtonSignal>;

#[derive(Clone)]
pub struct ReminderViewModel {
    pub form: ReminderFormState,
    pub panels: ReminderPanels,
    pub send_button: ButtonSignal,
    pub verify_button: ButtonSignal,
    controller: Rc<PageController>,
}

impl ReminderViewModel {
    pub fn new(api: ApiClient, notifier: Rc<dyn Notifier>) -> Self {
        let repository = ReminderRepository::new_with_client(Rc::new(api));
        let form = ReminderFormState::default();
        let panels = ReminderPanels::default();
        let send_button = ButtonSignal::new(SEND_OTP_LABEL);
        let verify_button = ButtonSignal::new(VERIFY_OTP_LABEL);
        let controller = Rc::new(ReminderFormController::new(
            repository,
            form,
            panels,
            send_button,
            verify_button,
            notifier,
        ));

        Self {
            form,
            panels,
            send_button,
            verify_button,
            controller,
        }
    }

    pub fn controller(&self) -> Rc<PageController> {
        Rc::clone(&self.controller)
    }

    pub fn send_otp(&self) {
        let controller = self.controller();
        spawn_local(async move {
            let _ = controller.send_otp().await;
        });
    }

    pub fn verify_otp(&self) {
        let controller = self.controller();
        spawn_local(async move {
            let _ = controller.verify_otp().await;
        });
    }

    pub fn reset_form(&self) {
        self.controller.reset_form();
    }
}

pub fn use_reminder_view_model() -> ReminderViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let notifier =
        use_context::<Rc<dyn Notifier>>().unwrap_or_else(|| Rc::new(BrowserAlert) as Rc<dyn Notifier>);
    ReminderViewModel::new(api, notifier)
}
