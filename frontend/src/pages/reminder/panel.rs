use super::utils::ReminderStep;
use super::view_model::{use_reminder_view_model, ReminderViewModel};
use leptos::*;

const INPUT_CLASS: &str = "mt-1 w-full border border-form-control-border bg-form-control-bg text-form-control-text rounded px-3 py-2";
const BUTTON_CLASS: &str = "w-full px-4 py-2 bg-action-primary-bg text-action-primary-text rounded disabled:opacity-50";

#[component]
pub fn ReminderPanel() -> impl IntoView {
    let vm = use_reminder_view_model();
    view! { <ReminderSteps vm=vm /> }
}

#[component]
pub fn ReminderSteps(vm: ReminderViewModel) -> impl IntoView {
    let form = vm.form;
    let panels = vm.panels;
    let send_button = vm.send_button;
    let verify_button = vm.verify_button;

    let vm_send = vm.clone();
    let vm_verify = vm.clone();
    let vm_reset = vm;

    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4">
            <div class="max-w-md w-full space-y-6 bg-surface-elevated shadow rounded-lg p-6">
                <h1 class="text-center text-3xl font-extrabold text-fg">"Remainder.io"</h1>

                <Show when=move || panels.is_visible(ReminderStep::Input) fallback=|| ()>
                    <section id="step1" class="space-y-4">
                        <div>
                            <label for="receiver_email" class="block text-sm font-medium text-fg-muted">
                                "Receiver Email"
                            </label>
                            <input
                                id="receiver_email"
                                type="email"
                                class=INPUT_CLASS
                                placeholder="you@example.com"
                                prop:value=move || form.receiver_email.get()
                                on:input=move |ev| form.receiver_email.set(event_target_value(&ev))
                            />
                        </div>
                        <div>
                            <label for="reminder_message" class="block text-sm font-medium text-fg-muted">
                                "Reminder Message"
                            </label>
                            <textarea
                                id="reminder_message"
                                class=INPUT_CLASS
                                rows=3
                                prop:value=move || form.reminder_message.get()
                                on:input=move |ev| form.reminder_message.set(event_target_value(&ev))
                            ></textarea>
                        </div>
                        <div>
                            <label for="reminder_time" class="block text-sm font-medium text-fg-muted">
                                "Reminder Time"
                            </label>
                            <input
                                id="reminder_time"
                                type="datetime-local"
                                class=INPUT_CLASS
                                prop:value=move || form.reminder_time.get()
                                on:input=move |ev| form.reminder_time.set(event_target_value(&ev))
                            />
                        </div>
                        <button
                            id="sendOtpBtn"
                            type="button"
                            class=BUTTON_CLASS
                            disabled=move || send_button.disabled()
                            on:click={
                                let vm = vm_send.clone();
                                move |_| vm.send_otp()
                            }
                        >
                            {move || send_button.label()}
                        </button>
                    </section>
                </Show>

                <Show when=move || panels.is_visible(ReminderStep::Otp) fallback=|| ()>
                    <section id="step2" class="space-y-4">
                        <p class="text-sm text-fg-muted">
                            "Enter the 6-digit code sent to your email."
                        </p>
                        <input
                            id="otp"
                            type="text"
                            class=INPUT_CLASS
                            placeholder="6-digit OTP"
                            maxlength=6
                            prop:value=move || form.otp.get()
                            on:input=move |ev| form.otp.set(event_target_value(&ev))
                        />
                        <button
                            id="verifyOtpBtn"
                            type="button"
                            class=BUTTON_CLASS
                            disabled=move || verify_button.disabled()
                            on:click={
                                let vm = vm_verify.clone();
                                move |_| vm.verify_otp()
                            }
                        >
                            {move || verify_button.label()}
                        </button>
                        <p id="otpStatus" class=move || {
                            panels
                                .status
                                .get()
                                .map(|s| s.class())
                                .unwrap_or("mt-2 text-sm")
                        }>
                            {move || panels.status.get().map(|s| s.text).unwrap_or_default()}
                        </p>
                    </section>
                </Show>

                <Show when=move || panels.is_visible(ReminderStep::Success) fallback=|| ()>
                    <section id="success" class="space-y-4 text-center">
                        <h2 class="text-2xl font-semibold text-status-success-text">
                            {move || panels.success_copy.get().heading}
                        </h2>
                        <p class="text-fg-muted">{move || panels.success_copy.get().body}</p>
                        <button
                            id="newReminderBtn"
                            type="button"
                            class=BUTTON_CLASS
                            on:click={
                                let vm = vm_reset.clone();
                                move |_| vm.reset_form()
                            }
                        >
                            "Set Another Reminder"
                        </button>
                    </section>
                </Show>
            </div>
        </div>
    }
}
