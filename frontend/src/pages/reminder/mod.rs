use leptos::*;

mod controller;
mod panel;
mod repository;
mod utils;
mod view_model;

pub use panel::ReminderPanel;

#[component]
pub fn ReminderPage() -> impl IntoView {
    view! { <ReminderPanel /> }
}
