mod api;
mod components;
pub mod config;
mod pages;
mod state;
pub mod utils;

#[cfg(test)]
pub mod test_support;

#[cfg(target_arch = "wasm32")]
mod app {
    use crate::api::ApiClient;
    use crate::components::{guard::RequireAuth, snackbar::Snackbar};
    use crate::config;
    use crate::pages::{home::HomePage, login::LoginPage, profile::ProfilePage};
    use crate::state::{auth::AuthProvider, session::Session, snackbar::SnackbarProvider};
    use leptos::*;
    use leptos_router::*;

    pub fn start() {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);
        log::info!("Starting MemberHub frontend (wasm)");

        // Kick off runtime config load from ./config.json (non-blocking).
        // Window globals take precedence when present.
        spawn_local(async move {
            config::init().await;
            log::info!("Runtime config initialized");
        });

        // Read the persisted session token once; everything that needs the
        // credential gets this handle, nothing reads storage again.
        let session = Session::load();

        mount_to_body(move || {
            provide_context(session.clone());
            provide_context(ApiClient::new(session.clone()));
            view! {
                <SnackbarProvider>
                    <AuthProvider>
                        <Router>
                            <Routes>
                                <Route path="/" view=ProtectedHome/>
                                <Route path="/login" view=LoginPage/>
                                <Route path="/profile" view=ProtectedProfile/>
                            </Routes>
                        </Router>
                        <Snackbar />
                    </AuthProvider>
                </SnackbarProvider>
            }
        });
    }

    #[component]
    fn ProtectedHome() -> impl IntoView {
        view! { <RequireAuth>{|| view! { <HomePage/> }}</RequireAuth> }
    }

    #[component]
    fn ProtectedProfile() -> impl IntoView {
        view! { <RequireAuth>{|| view! { <ProfilePage/> }}</RequireAuth> }
    }
}

#[cfg(target_arch = "wasm32")]
pub use app::start;
