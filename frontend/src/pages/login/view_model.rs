use crate::api::{ApiError, LoginRequest};
use crate::state::{auth, snackbar::SnackbarMessage};
use crate::utils::validation::{check_email, check_password};
use leptos::*;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginFieldErrors {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl LoginFieldErrors {
    pub fn is_clean(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A submission is already in flight; the attempt is dropped.
    Rejected,
    Invalid(LoginFieldErrors),
    Dispatch(LoginRequest),
}

/// Decides what a submit attempt does. Both validators always run so the
/// field errors stay independent of each other. The pending check makes the
/// in-flight flag the authoritative guard against overlapping submissions,
/// not the disabled state of a button.
pub fn submit_gate(email: &str, password: &str, pending: bool) -> SubmitOutcome {
    if pending {
        return SubmitOutcome::Rejected;
    }

    let errors = LoginFieldErrors {
        email: check_email(email).err().map(|e| e.to_string()),
        password: check_password(password).err().map(|e| e.to_string()),
    };

    if errors.is_clean() {
        SubmitOutcome::Dispatch(LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        })
    } else {
        SubmitOutcome::Invalid(errors)
    }
}

#[derive(Clone)]
pub struct LoginViewModel {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub field_errors: RwSignal<LoginFieldErrors>,
    pub error: RwSignal<Option<ApiError>>,
    pub login_action: Action<LoginRequest, Result<(), ApiError>>,
}

impl LoginViewModel {
    pub fn submit(&self) {
        let outcome = submit_gate(
            &self.email.get_untracked(),
            &self.password.get_untracked(),
            self.login_action.pending().get_untracked(),
        );
        match outcome {
            SubmitOutcome::Rejected => {}
            SubmitOutcome::Invalid(errors) => self.field_errors.set(errors),
            SubmitOutcome::Dispatch(request) => {
                self.field_errors.set(LoginFieldErrors::default());
                self.error.set(None);
                self.login_action.dispatch(request);
            }
        }
    }
}

pub fn use_login_view_model() -> LoginViewModel {
    let vm = LoginViewModel {
        email: create_rw_signal(String::new()),
        password: create_rw_signal(String::new()),
        field_errors: create_rw_signal(LoginFieldErrors::default()),
        error: create_rw_signal(None::<ApiError>),
        login_action: auth::use_login_action(),
    };

    let (_message, set_message) = crate::state::snackbar::use_snackbar();
    let error = vm.error;
    let login_action = vm.login_action;
    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(_) => {
                    error.set(None);
                    set_message.set(Some(SnackbarMessage::LoginSuccess));
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/");
                    }
                }
                Err(err) => error.set(Some(err)),
            }
        }
    });

    vm
}
