use contracts::system::activity_logs::ActivityLog;
use leptos::prelude::*;

use crate::shared::list::entity_list;

#[component]
pub fn ActivityLogsList() -> impl IntoView {
    entity_list::<ActivityLog>()
}
