use crate::pages::login::{components::form::LoginForm, view_model::use_login_view_model};
use leptos::{ev::SubmitEvent, Callback, *};

#[component]
pub fn LoginPanel() -> impl IntoView {
    let vm = use_login_view_model();
    let pending = vm.login_action.pending();

    let handle_submit = {
        let vm = vm.clone();
        Callback::new(move |ev: SubmitEvent| {
            ev.prevent_default();
            vm.submit();
        })
    };

    let email_input = {
        let email = vm.email;
        Callback::new(move |value: String| email.set(value))
    };
    let password_input = {
        let password = vm.password;
        Callback::new(move |value: String| password.set(value))
    };

    let field_errors = vm.field_errors;
    let email_error = Signal::derive(move || field_errors.get().email);
    let password_error = Signal::derive(move || field_errors.get().password);

    view! {
        <LoginForm
            email=vm.email
            password=vm.password
            email_error=email_error
            password_error=password_error
            error=vm.error
            pending=pending
            on_email_input=email_input
            on_password_input=password_input
            on_submit=handle_submit
        />
    }
}
