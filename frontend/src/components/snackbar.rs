use crate::state::snackbar::{use_snackbar, SnackbarMessage};
use leptos::*;

const DISMISS_AFTER_MS: u32 = 3_000;

/// Clears the displayed message only if it is still the one this timer was
/// started for; a stale timer must not dismiss a newer message.
fn dismiss_if_current(current: &mut Option<SnackbarMessage>, shown: SnackbarMessage) {
    if *current == Some(shown) {
        *current = None;
    }
}

#[component]
pub fn Snackbar() -> impl IntoView {
    let (message, set_message) = use_snackbar();

    create_effect(move |_| {
        if let Some(shown) = message.get() {
            spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(DISMISS_AFTER_MS).await;
                set_message.update(|current| dismiss_if_current(current, shown));
            });
        }
    });

    view! {
        <Show when=move || message.get().is_some() fallback=|| ()>
            <div class="fixed bottom-4 left-1/2 -translate-x-1/2 bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded-xl shadow-lg animate-pop-in">
                {move || message.get().map(|m| m.text()).unwrap_or_default()}
            </div>
        </Show>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::snackbar::SnackbarProvider;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_nothing_without_a_message() {
        let html = render_to_string(move || {
            view! {
                <SnackbarProvider>
                    <Snackbar />
                </SnackbarProvider>
            }
        });
        assert!(!html.contains("animate-pop-in"));
    }

    #[test]
    fn renders_the_pushed_message() {
        let html = render_to_string(move || {
            provide_context(create_signal(Some(SnackbarMessage::LoginSuccess)));
            view! { <Snackbar /> }
        });
        assert!(html.contains("로그인되었습니다."));
    }
}
