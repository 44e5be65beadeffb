use crate::pages::profile::{components::form::ProfileForm, view_model::use_profile_view_model};
use leptos::{ev::SubmitEvent, Callback, *};

#[component]
pub fn ProfilePanel() -> impl IntoView {
    let vm = use_profile_view_model();
    let pending = vm.update_action.pending();
    let loading = vm.loading();

    let handle_submit = {
        let vm = vm.clone();
        Callback::new(move |ev: SubmitEvent| {
            ev.prevent_default();
            vm.submit();
        })
    };

    let name_input = {
        let name = vm.name;
        Callback::new(move |value: String| name.set(value))
    };

    view! {
        <ProfileForm
            email=vm.email
            name=vm.name
            error=vm.error
            loading=loading
            pending=pending
            on_name_input=name_input
            on_submit=handle_submit
        />
    }
}
