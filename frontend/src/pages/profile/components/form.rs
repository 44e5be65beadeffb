use crate::{
    api::ApiError,
    components::{error::InlineErrorMessage, forms::TextField, layout::LoadingSpinner},
    pages::profile::view_model::{name_advisory, submit_disabled},
};
use leptos::{ev::SubmitEvent, Callback, *};

#[component]
pub fn ProfileForm(
    #[prop(into)] email: Signal<String>,
    #[prop(into)] name: Signal<String>,
    #[prop(into)] error: Signal<Option<ApiError>>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] pending: Signal<bool>,
    on_name_input: Callback<String>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    // Live advisory message, recomputed as the user types.
    let name_error = Signal::derive(move || name_advisory(&name.get()));
    let no_error = Signal::derive(|| None::<String>);
    let disabled = move || submit_disabled(&name.get()) || pending.get();

    view! {
        <div class="max-w-md mx-auto py-12 px-4 space-y-8">
            <h2 class="text-center text-3xl font-extrabold text-fg">"프로필"</h2>

            <Show when=move || loading.get() || pending.get() fallback=|| ()>
                <LoadingSpinner />
            </Show>

            <form class="space-y-6" on:submit=move |ev| on_submit.call(ev)>
                <TextField
                    label="이메일"
                    input_type="text"
                    placeholder=""
                    value=email
                    error=no_error
                    on_input=Callback::new(|_value: String| {})
                    disabled=true
                />
                <TextField
                    label="이름"
                    input_type="text"
                    placeholder="이름"
                    value=name
                    error=name_error
                    on_input=on_name_input
                />

                <div class="flex justify-end">
                    <a href="/withdrawal" class="text-sm text-fg-muted hover:underline">
                        "회원탈퇴"
                    </a>
                </div>

                <InlineErrorMessage error=error />

                <button
                    type="submit"
                    disabled=disabled
                    class="group relative w-full flex justify-center py-2 px-4 border border-transparent text-sm font-medium rounded-md text-white bg-blue-600 hover:bg-blue-700 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-blue-500 disabled:opacity-50"
                >
                    {move || if pending.get() { "변경 중..." } else { "변경" }}
                </button>
            </form>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    fn render_form(name: &str, error: Option<ApiError>) -> String {
        let name = name.to_string();
        render_to_string(move || {
            let email = create_rw_signal("daye@example.com".to_string());
            let name = create_rw_signal(name.clone());
            let error = create_rw_signal(error.clone());
            let loading = create_rw_signal(false);
            let pending = create_rw_signal(false);
            view! {
                <ProfileForm
                    email=email
                    name=name
                    error={Signal::from(error)}
                    loading={Signal::from(loading)}
                    pending={Signal::from(pending)}
                    on_name_input={Callback::new(|_v: String| {})}
                    on_submit={Callback::new(|_ev: SubmitEvent| {})}
                />
            }
        })
    }

    #[test]
    fn invalid_name_shows_live_advisory_message() {
        let html = render_form("jane!", None);
        assert!(html.contains("이름에 사용할 수 없는 문자가 있습니다."));
    }

    #[test]
    fn valid_name_shows_no_advisory_message() {
        let html = render_form("다예", None);
        assert!(!html.contains("이름에 사용할 수 없는 문자가 있습니다."));
        assert!(!html.contains("이름을 입력해주세요."));
    }

    #[test]
    fn request_failure_renders_in_the_top_level_area() {
        let html = render_form("다예", Some(ApiError::unknown("Update failed")));
        assert!(html.contains("Update failed"));
    }
}
