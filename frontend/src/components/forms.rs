use crate::components::error::FieldErrorMessage;
use leptos::*;

/// Labelled text input with an inline error slot. The error border and the
/// message render from the same signal so they can never disagree.
#[component]
pub fn TextField(
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] error: Signal<Option<String>>,
    on_input: Callback<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
) -> impl IntoView {
    let border_class = move || {
        if error.get().is_some() {
            "border-status-error-border"
        } else {
            "border-form-control-border"
        }
    };

    view! {
        <div class="flex flex-col gap-1.5 w-full">
            <label class="text-sm font-bold text-fg-muted ml-1">{label}</label>
            <input
                type=input_type
                placeholder=placeholder
                prop:value=value
                disabled=disabled
                class=move || format!(
                    "appearance-none rounded-xl relative block w-full px-3 py-2 border placeholder-text-muted text-fg focus:outline-none focus:ring-action-primary-focus disabled:opacity-50 disabled:bg-state-disabled-bg sm:text-sm {}",
                    border_class()
                )
                on:input=move |ev| on_input.call(event_target_value(&ev))
            />
            <FieldErrorMessage error=error />
        </div>
    }
}
