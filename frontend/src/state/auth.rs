use crate::{
    api::{use_client, ApiError, LoginRequest, UserResponse},
    pages::login::repository::LoginRepository,
    state::session::Session,
};
use leptos::*;

type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub user: Option<UserResponse>,
    pub is_authenticated: bool,
    pub loading: bool,
}

fn create_auth_context() -> AuthContext {
    let (auth_state, set_auth_state) = create_signal(AuthState::default());

    // A persisted token means a previous session; hydrate the user from the
    // API before rendering anything auth-dependent.
    let api_client = use_client();
    if api_client.session().is_authenticated() {
        set_auth_state.update(|state| state.loading = true);
        let set_auth_for_check = set_auth_state;
        spawn_local(async move {
            match api_client.get_me().await {
                Ok(user) => set_auth_for_check.update(|state| {
                    state.user = Some(user);
                    state.is_authenticated = true;
                    state.loading = false;
                }),
                Err(_) => set_auth_for_check.update(|state| {
                    state.user = None;
                    state.is_authenticated = false;
                    state.loading = false;
                }),
            }
        });
    }

    (auth_state, set_auth_state)
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let ctx = create_auth_context();
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

pub async fn login_request(
    request: LoginRequest,
    repo: &LoginRepository,
    session: &Session,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    set_auth_state.update(|state| state.loading = true);

    match repo.login(request).await {
        Ok(response) => {
            session.set_token(response.access_token);
            set_auth_state.update(|state| {
                state.user = response.user;
                state.is_authenticated = true;
                state.loading = false;
            });
            Ok(())
        }
        Err(error) => {
            log::warn!("login failed: {}", error.error);
            set_auth_state.update(|state| state.loading = false);
            Err(error)
        }
    }
}

pub fn logout(session: &Session, set_auth_state: WriteSignal<AuthState>) {
    session.clear();
    set_auth_state.update(|state| {
        state.user = None;
        state.is_authenticated = false;
        state.loading = false;
    });
}

pub fn use_login_action() -> Action<LoginRequest, Result<(), ApiError>> {
    let (_auth, set_auth) = use_auth();
    let api = use_client();
    let session = api.session().clone();
    let repo = LoginRepository::new_with_client(std::rc::Rc::new(api));

    create_action(move |request: &LoginRequest| {
        let payload = request.clone();
        let repo = repo.clone();
        let session = session.clone();
        async move { login_request(payload, &repo, &session, set_auth).await }
    })
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::ApiClient;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn successful_login_stores_token_and_marks_authenticated() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/auth/login");
            then.status(200).json_body(json!({
                "access_token": "tok-9",
                "user": { "email": "daye@example.com", "name": "다예" }
            }));
        });

        let runtime = create_runtime();
        let (state, set_state) = create_signal(AuthState::default());
        let session = Session::new();
        let api = ApiClient::new_with_base_url(server.url("/api"), session.clone());
        let repo = LoginRepository::new_with_client(std::rc::Rc::new(api));

        login_request(
            LoginRequest {
                email: "daye@example.com".into(),
                password: "pass-word".into(),
            },
            &repo,
            &session,
            set_state,
        )
        .await
        .unwrap();

        assert_eq!(session.token().as_deref(), Some("tok-9"));
        let snapshot = state.get();
        assert!(snapshot.is_authenticated);
        assert!(!snapshot.loading);
        assert_eq!(snapshot.user.unwrap().email, "daye@example.com");
        runtime.dispose();
    }

    #[tokio::test]
    async fn loading_is_true_exactly_while_the_request_is_outstanding() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/auth/login");
            then.status(200).json_body(json!({"access_token": "tok-5"}));
        });

        let runtime = create_runtime();
        let (state, set_state) = create_signal(AuthState::default());
        let session = Session::new();
        let api = ApiClient::new_with_base_url(server.url("/api"), session.clone());
        let repo = LoginRepository::new_with_client(std::rc::Rc::new(api));

        assert!(!state.get().loading);

        let request = LoginRequest {
            email: "daye@example.com".into(),
            password: "pass-word".into(),
        };
        let fut = login_request(request, &repo, &session, set_state);
        tokio::pin!(fut);

        // The first poll runs up to the outstanding HTTP call.
        assert!(futures::poll!(fut.as_mut()).is_pending());
        assert!(state.get().loading);

        fut.await.unwrap();
        assert!(!state.get().loading);
        assert!(state.get().is_authenticated);
        runtime.dispose();
    }

    #[tokio::test]
    async fn failed_login_leaves_session_empty_and_clears_loading() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/auth/login");
            then.status(401).json_body(json!({"error": "Invalid credentials"}));
        });

        let runtime = create_runtime();
        let (state, set_state) = create_signal(AuthState::default());
        let session = Session::new();
        let api = ApiClient::new_with_base_url(server.url("/api"), session.clone());
        let repo = LoginRepository::new_with_client(std::rc::Rc::new(api));

        let error = login_request(
            LoginRequest {
                email: "daye@example.com".into(),
                password: "wrong".into(),
            },
            &repo,
            &session,
            set_state,
        )
        .await
        .unwrap_err();

        assert_eq!(error.error, "Invalid credentials");
        assert!(session.token().is_none());
        let snapshot = state.get();
        assert!(!snapshot.is_authenticated);
        assert!(!snapshot.loading);
        runtime.dispose();
    }
}
