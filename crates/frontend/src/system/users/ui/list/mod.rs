use contracts::system::users::User;
use leptos::prelude::*;

use crate::shared::list::entity_list;

/// Users with their role and creation date
#[component]
pub fn UsersListPage() -> impl IntoView {
    entity_list::<User>()
}
