use crate::{components::layout::Layout, state::auth::use_auth};
use leptos::*;

#[component]
pub fn HomePage() -> impl IntoView {
    let (auth, _) = use_auth();
    let greeting = move || {
        auth.get()
            .user
            .map(|user| format!("{}님, 안녕하세요.", user.name))
            .unwrap_or_else(|| "안녕하세요.".to_string())
    };

    view! {
        <Layout>
            <div class="space-y-4">
                <p class="text-2xl font-bold text-fg">{greeting}</p>
                <a href="/profile" class="text-action-primary-bg hover:underline text-sm font-medium">
                    "프로필 변경"
                </a>
            </div>
        </Layout>
    }
}
