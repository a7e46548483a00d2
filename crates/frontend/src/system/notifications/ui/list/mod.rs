use contracts::system::notifications::Notification;
use leptos::prelude::*;

use crate::shared::list::entity_list;

/// Notifications of the current user, unread ones flagged
#[component]
pub fn NotificationsList() -> impl IntoView {
    entity_list::<Notification>()
}
