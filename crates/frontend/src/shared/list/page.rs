use std::sync::Arc;

use contracts::shared::flash::FlashMessage;
use contracts::shared::pagination::ListBody;
use contracts::shared::table::{DeleteHandler, DeleteTrigger};
use contracts::{CrmEntity, EntityKind};
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;
use thaw::*;

use super::api;
use super::state::{create_state, response_wanted};
use crate::shared::components::filter_panel::{FilterControls, FilterPanel, FilterTag, SearchInput};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::{data_table, TableHandlers};
use crate::shared::flash::use_flash;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::storage::save_per_page;
use crate::system::auth::context::{use_capabilities, use_read_only};

/// Edit pages are served by the backend
fn edit_url(kind: EntityKind, id: i64) -> String {
    format!("/{}/{}/edit", kind.resource(), id)
}

fn open_edit_page(kind: EntityKind, id: i64) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_href(&edit_url(kind, id)) {
            log::error!("Failed to open edit page: {:?}", e);
        }
    }
}

/// Chips for the active filters, labelled with the choice labels
fn filter_tag_labels(kind: EntityKind, filters: &[(String, String)]) -> Vec<(String, String)> {
    filters
        .iter()
        .map(|(key, value)| {
            let label = match kind.filter_options().iter().find(|o| o.value == key) {
                Some(option) => format!("{}: {}", option.label, option.choice_label(value)),
                None => format!("{}: {}", key, value),
            };
            (key.clone(), label)
        })
        .collect()
}

/// Full list view of records of kind `T`: filters, pager, table, delete
/// confirmation.
pub fn entity_list<T>() -> impl IntoView
where
    T: CrmEntity + DeserializeOwned,
{
    let kind = T::KIND;
    let state = create_state::<T>(kind);
    let flash = use_flash();
    let capabilities = use_capabilities(kind);
    let read_only = use_read_only(kind);
    let pending_delete: RwSignal<Option<DeleteTrigger>> = RwSignal::new(None);
    let filters_expanded = RwSignal::new(false);

    let load_data = move || {
        let Some((seq, query)) = state.try_update(|s| (s.begin_request(), s.query.clone())) else {
            return;
        };
        spawn_local(async move {
            let result = api::fetch_page::<T>(&query).await;
            if !response_wanted(state, seq) {
                log::debug!("dropping stale {} response #{}", kind.resource(), seq);
                return;
            }
            match result {
                Ok(response) => {
                    if let Err(violation) = response.items.validate() {
                        log::warn!("{} envelope: {}", kind.resource(), violation);
                    }
                    state.update(|s| {
                        s.page = Some(response.items);
                        s.loading = false;
                    });
                    flash.navigate(response.flash);
                }
                Err(e) => {
                    log::error!("{}", e);
                    state.update(|s| {
                        s.error = Some(format!("Could not load {}: {}", kind.display_name(), e));
                        s.loading = false;
                    });
                }
            }
        });
    };

    let on_delete: DeleteHandler = Arc::new(move |id: Option<i64>| {
        pending_delete.set(None);
        let Some(id) = id else {
            return;
        };
        spawn_local(async move {
            match api::delete_record::<T>(id).await {
                Ok(message) => {
                    flash.navigate(message);
                    load_data();
                }
                Err(e) => {
                    log::error!("{}", e);
                    flash.navigate(FlashMessage::error(e));
                }
            }
        });
    });

    // Rebuilt whenever the capabilities change
    let columns = RwSignal::new(T::columns(on_delete.clone(), false, false));
    Effect::new(move |_| {
        let caps = capabilities.get();
        columns.set(T::columns(on_delete.clone(), caps.can_edit, caps.can_delete));
    });

    Effect::new(move |_| load_data());

    let handlers = TableHandlers {
        on_edit: Callback::new(move |id: i64| open_edit_page(kind, id)),
        on_request_delete: Callback::new(move |trigger: DeleteTrigger| {
            pending_delete.set(Some(trigger))
        }),
        on_sort: Callback::new(move |field: String| {
            state.update(|s| s.query.toggle_sort(&field));
            load_data();
        }),
        current_sort: Signal::derive(move || state.with(|s| s.query.sort.clone())),
        direction: Signal::derive(move || state.with(|s| s.query.direction)),
    };

    let on_filter = Callback::new(move |(key, value): (String, String)| {
        state.update(|s| s.query.set_filter(&key, &value));
        load_data();
    });
    let on_clear_filters = Callback::new(move |_: ()| {
        state.update(|s| s.query.clear_filters());
        load_data();
    });
    let on_search = Callback::new(move |text: String| {
        state.update(|s| s.query.set_search(&text));
        load_data();
    });
    let on_toggle_direction = Callback::new(move |_: ()| {
        state.update(|s| {
            s.query.direction = s.query.direction.toggled();
            s.query.go_to(1);
        });
        load_data();
    });
    let on_page_change = Callback::new(move |page: u32| {
        state.update(|s| s.query.go_to(page));
        load_data();
    });
    let on_per_page_change = Callback::new(move |per_page: u32| {
        state.update(|s| s.query.set_per_page(per_page));
        save_per_page(kind, per_page);
        load_data();
    });

    let body = move || {
        state.with(|s| match ListBody::project(s.loading, s.page.as_ref()) {
            ListBody::Loading => view! {
                <div class="list__state list__state--loading">"Loading..."</div>
            }
            .into_any(),
            ListBody::Empty => view! {
                <div class="list__state list__state--empty">
                    {format!("No {} found", kind.display_name().to_lowercase())}
                </div>
            }
            .into_any(),
            ListBody::Rows(rows) => columns.with(|cols| {
                data_table(kind.resource(), cols, rows, kind.sort_options(), handlers)
            }),
        })
    };

    let filter_tags = move || {
        let active: Vec<(String, String)> = state.with(|s| {
            s.query
                .filters
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect()
        });
        let has_search = state.with(|s| s.query.search.is_some());
        let tags = filter_tag_labels(kind, &active)
            .into_iter()
            .map(|(key, label)| {
                view! {
                    <FilterTag
                        label=label
                        on_remove=Callback::new(move |_| on_filter.run((key.clone(), String::new())))
                    />
                }
            })
            .collect_view();
        let clear = (has_search || !active.is_empty()).then(|| {
            view! {
                <button class="filter-tag filter-tag--clear" on:click=move |_| on_clear_filters.run(())>
                    "Clear all"
                </button>
            }
        });
        view! { <>{tags}{clear}</> }
    };

    let delete_dialog = move || {
        pending_delete.get().map(|trigger| {
            let on_overlay = trigger.clone();
            let on_cancel = trigger.clone();
            let on_confirm = trigger;
            view! {
                <div class="modal-overlay" on:click=move |_| on_overlay.cancel()>
                    <div class="modal" on:click=move |ev| ev.stop_propagation()>
                        <div class="modal-header">
                            <h2 class="modal-title">"Delete record"</h2>
                        </div>
                        <div class="modal-body">
                            {format!(
                                "Delete {} #{}? This cannot be undone.",
                                kind.display_name().to_lowercase(),
                                on_confirm.record_id(),
                            )}
                        </div>
                        <div class="modal-footer">
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| on_cancel.cancel()
                            >
                                "Cancel"
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| on_confirm.confirm()
                            >
                                "Delete"
                            </Button>
                        </div>
                    </div>
                </div>
            }
        })
    };

    view! {
        <PageFrame page_id=kind.resource()>
            <div class="page__header">
                <div class="page__header-left">
                    {icon(kind.resource())}
                    <h1 class="page__title">{kind.display_name()}</h1>
                    <span class="badge badge--neutral">
                        {move || state.with(|s| s.total()).to_string()}
                    </span>
                    <Show when=move || read_only.get()>
                        <span class="badge badge--warning">"Read only"</span>
                    </Show>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_data()
                        disabled=Signal::derive(move || state.with(|s| s.loading))
                    >
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || state.with(|s| s.error.clone()).map(|e| view! {
                    <div class="alert alert--error">{e}</div>
                })}

                <FilterPanel
                    is_expanded=filters_expanded
                    active_filters_count=Signal::derive(move || {
                        state.with(|s| s.query.active_filters_count())
                    })
                    pagination_controls=move || view! {
                        <PaginationControls
                            links=Signal::derive(move || {
                                state.with(|s| s.page.as_ref().map(|p| p.links.clone()).unwrap_or_default())
                            })
                            summary=Signal::derive(move || {
                                state.with(|s| s.page.as_ref().and_then(|p| p.summary()))
                            })
                            per_page=Signal::derive(move || state.with(|s| s.query.per_page))
                            on_page_change=on_page_change
                            on_per_page_change=on_per_page_change
                        />
                    }
                    filter_content=move || view! {
                        <SearchInput
                            value=Signal::derive(move || {
                                state.with(|s| s.query.search.clone().unwrap_or_default())
                            })
                            on_change=on_search
                            placeholder=format!("Search {}...", kind.display_name().to_lowercase())
                        />
                        <FilterControls
                            options=kind.filter_options()
                            sort_options=kind.sort_options()
                            values=Signal::derive(move || state.with(|s| s.query.filters.clone()))
                            sort=Signal::derive(move || state.with(|s| s.query.sort.clone()))
                            direction=Signal::derive(move || state.with(|s| s.query.direction))
                            on_filter=on_filter
                            on_sort=handlers.on_sort
                            on_toggle_direction=on_toggle_direction
                        />
                    }
                    filter_tags=move || filter_tags
                />

                {body}
                {delete_dialog}
            </div>
        </PageFrame>
    }
}
