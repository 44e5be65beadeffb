use crate::{
    api::use_client,
    state::auth::{self, use_auth},
};
use leptos::*;

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let (auth, set_auth) = use_auth();
    let session = use_client().session().clone();
    let is_authenticated = create_memo(move |_| auth.get().is_authenticated);

    let on_logout = move |_| {
        auth::logout(&session, set_auth);
        if let Some(win) = web_sys::window() {
            let _ = win.location().set_href("/login");
        }
    };

    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-3xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <h1 class="text-xl font-semibold text-fg">"MemberHub"</h1>
                    <nav class="flex items-center space-x-4">
                        <a href="/" class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover">
                            "홈"
                        </a>
                        <a href="/profile" class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover">
                            "프로필"
                        </a>
                        <Show
                            when=move || is_authenticated.get()
                            fallback=|| view! {
                                <a href="/login" class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover">
                                    "로그인"
                                </a>
                            }
                        >
                            <button
                                on:click=on_logout.clone()
                                class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
                            >
                                "로그아웃"
                            </button>
                        </Show>
                    </nav>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-50">
            <Header />
            <main class="max-w-3xl mx-auto py-8 px-4 sm:px-6 lg:px-8">
                {children()}
            </main>
        </div>
    }
}
