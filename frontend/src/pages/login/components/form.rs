use crate::{
    api::ApiError,
    components::{error::InlineErrorMessage, forms::TextField, layout::LoadingSpinner},
};
use leptos::{ev::SubmitEvent, Callback, *};

#[component]
pub fn LoginForm(
    #[prop(into)] email: Signal<String>,
    #[prop(into)] password: Signal<String>,
    #[prop(into)] email_error: Signal<Option<String>>,
    #[prop(into)] password_error: Signal<Option<String>>,
    #[prop(into)] error: Signal<Option<ApiError>>,
    #[prop(into)] pending: Signal<bool>,
    on_email_input: Callback<String>,
    on_password_input: Callback<String>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50 py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <h2 class="mt-6 text-center text-3xl font-extrabold text-fg">"로그인"</h2>

                <Show when=move || pending.get() fallback=|| ()>
                    <LoadingSpinner />
                </Show>

                <form class="mt-8 space-y-6" on:submit=move |ev| on_submit.call(ev)>
                    <TextField
                        label="이메일"
                        input_type="text"
                        placeholder="이메일"
                        value=email
                        error=email_error
                        on_input=on_email_input
                    />
                    <TextField
                        label="비밀번호"
                        input_type="password"
                        placeholder="비밀번호"
                        value=password
                        error=password_error
                        on_input=on_password_input
                    />

                    <div class="flex justify-end">
                        <a href="/signup" class="text-sm text-action-primary-bg hover:underline">
                            "회원가입"
                        </a>
                    </div>

                    <InlineErrorMessage error=error />

                    <button
                        type="submit"
                        disabled=pending
                        class="group relative w-full flex justify-center py-2 px-4 border border-transparent text-sm font-medium rounded-md text-white bg-blue-600 hover:bg-blue-700 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-blue-500 disabled:opacity-50"
                    >
                        {move || if pending.get() { "로그인 중..." } else { "로그인" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
