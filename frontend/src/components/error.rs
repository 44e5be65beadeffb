use crate::api::ApiError;
use leptos::*;

/// Inline message under a single input. Field-level failures never reach the
/// top-level error area.
#[component]
pub fn FieldErrorMessage(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <p class="mt-1 text-sm text-status-error-text">
                {move || error.get().unwrap_or_default()}
            </p>
        </Show>
    }
}

/// Top-level message area for request failures.
#[component]
pub fn InlineErrorMessage(#[prop(into)] error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded space-y-1 my-2">
                <div class="font-bold">{move || error.get().map(|e| e.error).unwrap_or_default()}</div>
                {move || error.get().map(|e| {
                    let code = e.code;
                    if code != "UNKNOWN" && !code.is_empty() {
                        view! { <div class="text-xs opacity-75">{"Code: "}{code}</div> }.into_view()
                    } else {
                        ().into_view()
                    }
                }).unwrap_or_else(|| ().into_view())}
            </div>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn field_error_renders_its_reason() {
        let html = render_to_string(move || {
            let error = create_rw_signal(Some("이메일 형식이 올바르지 않습니다.".to_string()));
            view! { <FieldErrorMessage error={Signal::from(error)} /> }
        });
        assert!(html.contains("이메일 형식이 올바르지 않습니다."));
    }

    #[test]
    fn field_error_renders_nothing_when_clean() {
        let html = render_to_string(move || {
            let error = create_rw_signal(None::<String>);
            view! { <FieldErrorMessage error={Signal::from(error)} /> }
        });
        assert!(!html.contains("text-status-error-text"));
    }

    #[test]
    fn inline_error_renders_message_and_code() {
        let html = render_to_string(move || {
            let error = create_rw_signal(Some(ApiError::request_failed("Request failed")));
            view! { <InlineErrorMessage error={Signal::from(error)} /> }
        });
        assert!(html.contains("Request failed"));
        assert!(html.contains("Code: REQUEST_FAILED"));
    }

    #[test]
    fn inline_error_hides_unknown_code() {
        let html = render_to_string(move || {
            let error = create_rw_signal(Some(ApiError::unknown("boom")));
            view! { <InlineErrorMessage error={Signal::from(error)} /> }
        });
        assert!(html.contains("boom"));
        assert!(!html.contains("Code:"));
    }
}
