use contracts::domain::a001_lead::Lead;
use leptos::prelude::*;

use crate::shared::list::entity_list;

/// Leads list: status and source filters, assignee column
#[component]
pub fn LeadsList() -> impl IntoView {
    entity_list::<Lead>()
}
