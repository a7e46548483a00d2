use contracts::system::auth::{Capabilities, CurrentUser};
use contracts::EntityKind;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;

#[derive(Clone, Debug, Default)]
pub struct PermissionState {
    pub user: Option<CurrentUser>,
    pub is_loaded: bool,
}

/// Loads the current user once and provides its permissions to the tree
#[component]
pub fn PermissionProvider(children: Children) -> impl IntoView {
    let state = RwSignal::new(PermissionState::default());

    Effect::new(move |_| {
        spawn_local(async move {
            match api::get_current_user().await {
                Ok(user) => {
                    log::debug!("permissions loaded for user {}", user.id);
                    state.set(PermissionState {
                        user: Some(user),
                        is_loaded: true,
                    });
                }
                Err(e) => {
                    // Without a user every list is read-only
                    log::error!("Failed to load current user: {}", e);
                    state.set(PermissionState {
                        user: None,
                        is_loaded: true,
                    });
                }
            }
        });
    });

    provide_context(state);

    children()
}

/// Hook to access permission state
pub fn use_permissions() -> RwSignal<PermissionState> {
    use_context::<RwSignal<PermissionState>>().expect("PermissionProvider not found in component tree")
}

/// Capability flags of the current user for one list view
pub fn use_capabilities(kind: EntityKind) -> Signal<Capabilities> {
    let state = use_permissions();
    Signal::derive(move || {
        state.with(|s| {
            s.user
                .as_ref()
                .map(|u| Capabilities::resolve(kind, u))
                .unwrap_or(Capabilities::NONE)
        })
    })
}

/// True once permissions are known and grant neither edit nor delete
pub fn use_read_only(kind: EntityKind) -> Signal<bool> {
    let state = use_permissions();
    let capabilities = use_capabilities(kind);
    Signal::derive(move || state.with(|s| s.is_loaded) && !capabilities.get().any())
}
