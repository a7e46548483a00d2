//! Bridge between flash payloads of responses and the toast surface
//!
//! Every list or delete response is a navigation: it bumps the navigation
//! id and replaces the current flash payload. [`FlashBridge`] watches both
//! and hands each payload to the toaster once per navigation, no matter how
//! often the page re-renders.

use contracts::shared::flash::{FlashChannel, FlashGate, FlashMessage, NavigationId};
use leptos::prelude::*;
use thaw::*;

/// Navigation identity and flash payload of the latest response
#[derive(Clone, Copy)]
pub struct FlashState {
    navigation: RwSignal<NavigationId>,
    flash: RwSignal<FlashMessage>,
}

impl FlashState {
    pub fn new() -> Self {
        Self {
            navigation: RwSignal::new(NavigationId::default()),
            flash: RwSignal::new(FlashMessage::default()),
        }
    }

    /// Record a new navigation carrying `flash`
    pub fn navigate(&self, flash: FlashMessage) {
        self.flash.set(flash);
        self.navigation.update(|n| *n = n.next());
    }
}

impl Default for FlashState {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to access the flash state
pub fn use_flash() -> FlashState {
    use_context::<FlashState>().expect("FlashState not provided")
}

fn intent(channel: FlashChannel) -> ToastIntent {
    match channel {
        FlashChannel::Positive => ToastIntent::Success,
        FlashChannel::Negative => ToastIntent::Error,
    }
}

/// Sends the flash payload of every new navigation to the toaster.
/// Must be mounted inside `ToasterProvider`.
#[component]
pub fn FlashBridge() -> impl IntoView {
    let state = use_flash();
    let toaster = ToasterInjection::expect_context();
    let mut gate = FlashGate::new();

    Effect::new(move |_| {
        let navigation = state.navigation.get();
        let dispatches = state.flash.with(|flash| gate.observe(navigation, flash));
        for (channel, text) in dispatches {
            log::debug!("flash {:?} on navigation {}: {}", channel, navigation.0, text);
            toaster.dispatch_toast(
                move || {
                    view! {
                        <Toast>
                            <ToastBody>{text.clone()}</ToastBody>
                        </Toast>
                    }
                },
                ToastOptions::default().with_intent(intent(channel)),
            );
        }
    });
}
