use std::rc::Rc;

use crate::api::{use_client, ApiError, UpdateUserRequest, UserResponse};
use crate::pages::profile::repository::ProfileRepository;
use crate::state::snackbar::SnackbarMessage;
use crate::utils::validation::{check_name, is_empty, is_invalid_name};
use leptos::*;

/// Continuous advisory gate for the submit button, independent of whether a
/// submission is running.
pub fn submit_disabled(name: &str) -> bool {
    is_empty(name) || is_invalid_name(name)
}

/// Live inline message for the name field, recomputed on every change.
pub fn name_advisory(name: &str) -> Option<String> {
    check_name(name).err().map(|e| e.to_string())
}

#[derive(Clone)]
pub struct ProfileViewModel {
    pub email: RwSignal<String>,
    pub name: RwSignal<String>,
    pub error: RwSignal<Option<ApiError>>,
    pub profile_resource: Resource<(), Result<UserResponse, ApiError>>,
    pub update_action: Action<UpdateUserRequest, Result<(), ApiError>>,
}

impl ProfileViewModel {
    /// In-flight flag for the initial fetch; true from the moment the
    /// resource starts loading.
    pub fn loading(&self) -> Signal<bool> {
        self.profile_resource.loading().into()
    }

    pub fn submit(&self) {
        if self.update_action.pending().get_untracked() {
            return;
        }
        let name = self.name.get_untracked();
        if submit_disabled(&name) {
            return;
        }
        self.error.set(None);
        self.update_action.dispatch(UpdateUserRequest {
            email: self.email.get_untracked(),
            name,
        });
    }
}

pub fn use_profile_view_model() -> ProfileViewModel {
    let api = use_client();
    let repo = ProfileRepository::new_with_client(Rc::new(api));

    let email = create_rw_signal(String::new());
    let name = create_rw_signal(String::new());
    let error = create_rw_signal(None::<ApiError>);

    let fetch_repo = repo.clone();
    let profile_resource = create_resource(
        || (),
        move |_| {
            let repo = fetch_repo.clone();
            async move { repo.fetch().await }
        },
    );

    create_effect(move |_| {
        if let Some(result) = profile_resource.get() {
            match result {
                Ok(user) => {
                    email.set(user.email);
                    name.set(user.name);
                }
                Err(err) => error.set(Some(err)),
            }
        }
    });

    let update_repo = repo;
    let update_action = create_action(move |request: &UpdateUserRequest| {
        let repo = update_repo.clone();
        let payload = request.clone();
        async move { repo.update(payload).await }
    });

    let (_message, set_message) = crate::state::snackbar::use_snackbar();
    create_effect(move |_| {
        if let Some(result) = update_action.value().get() {
            match result {
                Ok(_) => {
                    error.set(None);
                    set_message.set(Some(SnackbarMessage::ProfileUpdated));
                }
                Err(err) => error.set(Some(err)),
            }
        }
    });

    ProfileViewModel {
        email,
        name,
        error,
        profile_resource,
        update_action,
    }
}
