#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::UserResponse;
    use crate::state::auth::AuthState;
    use leptos::*;

    pub fn sample_user() -> UserResponse {
        UserResponse {
            email: "daye@example.com".into(),
            name: "다예".into(),
        }
    }

    pub fn provide_auth_state(is_authenticated: bool, loading: bool) {
        let (auth, set_auth) = create_signal(AuthState {
            user: if is_authenticated {
                Some(sample_user())
            } else {
                None
            },
            is_authenticated,
            loading,
        });
        provide_context((auth, set_auth));
    }
}
