use contracts::EntityKind;
use leptos::prelude::*;

use crate::domain::a001_lead::ui::list::LeadsList;
use crate::shared::icons::icon;
use crate::system::activity_logs::ui::list::ActivityLogsList;
use crate::system::notifications::ui::list::NotificationsList;
use crate::system::users::ui::list::UsersListPage;
// Sections are switched by a signal, no Router

/// Section shown when the page is opened at `path`
fn initial_section(path: &str) -> EntityKind {
    path.trim_matches('/')
        .split('/')
        .next()
        .and_then(EntityKind::from_resource)
        .unwrap_or(EntityKind::Leads)
}

fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default()
}

fn section_view(kind: EntityKind) -> AnyView {
    match kind {
        EntityKind::Leads => view! { <LeadsList /> }.into_any(),
        EntityKind::Users => view! { <UsersListPage /> }.into_any(),
        EntityKind::ActivityLogs => view! { <ActivityLogsList /> }.into_any(),
        EntityKind::Notifications => view! { <NotificationsList /> }.into_any(),
    }
}

#[component]
fn Sidebar(active: RwSignal<EntityKind>) -> impl IntoView {
    view! {
        <div class="app-sidebar__content">
            {EntityKind::all()
                .into_iter()
                .map(|kind| {
                    view! {
                        <div
                            class="app-sidebar__item"
                            class:app-sidebar__item--active=move || active.get() == kind
                            on:click=move |_| active.set(kind)
                        >
                            <div class="app-sidebar__item-content">
                                {icon(kind.resource())}
                                <span>{kind.display_name()}</span>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let active = RwSignal::new(initial_section(&current_path()));

    view! {
        <div class="app-layout">
            <div class="app-body">
                <nav class="app-sidebar">
                    <Sidebar active=active />
                </nav>
                <main class="app-main">
                    {move || section_view(active.get())}
                </main>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_section_from_path() {
        assert_eq!(initial_section("/activity-logs"), EntityKind::ActivityLogs);
        assert_eq!(initial_section("/users/4/edit"), EntityKind::Users);
        assert_eq!(initial_section("/"), EntityKind::Leads);
        assert_eq!(initial_section("/unknown"), EntityKind::Leads);
    }
}
