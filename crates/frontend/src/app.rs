use crate::routes::routes::AppRoutes;
use crate::shared::flash::{FlashBridge, FlashState};
use crate::system::auth::context::PermissionProvider;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn App() -> impl IntoView {
    // Flash payloads of every response go through this state
    provide_context(FlashState::new());

    view! {
        <ConfigProvider>
            <ToasterProvider>
                <FlashBridge />
                <PermissionProvider>
                    <AppRoutes />
                </PermissionProvider>
            </ToasterProvider>
        </ConfigProvider>
    }
}
