use leptos::*;

pub mod components;
pub mod repository;
pub mod view_model;

mod panel;

pub use panel::ProfilePanel;

#[component]
pub fn ProfilePage() -> impl IntoView {
    view! { <ProfilePanel /> }
}
