use std::collections::BTreeMap;

use contracts::shared::list_options::{FilterControl, FilterOption, SortOption};
use contracts::shared::list_query::SortDirection;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::config::{MIN_SEARCH_LEN, SEARCH_DEBOUNCE_MS};
use crate::shared::icons::icon;

/// FilterPanel component - collapsible filter panel with pagination
#[component]
pub fn FilterPanel(
    /// Whether the filter panel is expanded
    #[prop(into)]
    is_expanded: RwSignal<bool>,

    /// Number of active filters (for badge display)
    #[prop(into)]
    active_filters_count: Signal<usize>,

    /// Pagination controls (slot)
    #[prop(into)]
    pagination_controls: ViewFn,

    /// Filter content (form fields)
    #[prop(into)]
    filter_content: ViewFn,

    /// Filter tags (active filter chips) - optional
    #[prop(optional, into)]
    filter_tags: Option<ViewFn>,
) -> impl IntoView {
    let toggle_expanded = move |_| {
        is_expanded.update(|e| *e = !*e);
    };

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div
                    class="filter-panel-header__left"
                    on:click=toggle_expanded
                >
                    <span class=move || {
                        if is_expanded.get() {
                            "filter-panel__chevron filter-panel__chevron--expanded"
                        } else {
                            "filter-panel__chevron"
                        }
                    }>
                        {icon("chevron-down")}
                    </span>
                    {icon("filter")}
                    <span class="filter-panel__title">"Filters"</span>
                    {move || {
                        let count = active_filters_count.get();
                        if count > 0 {
                            view! {
                                <span class="badge badge--primary">{count}</span>
                            }.into_any()
                        } else {
                            view! { <></> }.into_any()
                        }
                    }}
                </div>
                <div class="filter-panel-header__center">
                    {pagination_controls.run()}
                </div>
            </div>

            <div class=move || {
                if is_expanded.get() {
                    "filter-panel__collapsible filter-panel__collapsible--expanded"
                } else {
                    "filter-panel__collapsible filter-panel__collapsible--collapsed"
                }
            }>
                <div class="filter-panel-content">
                    {filter_content.run()}
                    {filter_tags.as_ref().map(|tags| view! {
                        <div class="filter-panel__tags">{tags.run()}</div>
                    })}
                </div>
            </div>
        </div>
    }
}

/// FilterTag component - individual filter tag/chip
#[component]
pub fn FilterTag(
    /// Tag label
    #[prop(into)]
    label: String,

    /// Callback when remove is clicked
    on_remove: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="filter-tag">
            <span>{label}</span>
            <span
                class="filter-tag__remove"
                on:click=move |e| {
                    e.stop_propagation();
                    on_remove.run(());
                }
            >
                {icon("x")}
            </span>
        </div>
    }
}

/// Text that may be sent as a search: blank clears the search, anything
/// shorter than `MIN_SEARCH_LEN` is held back.
pub fn search_to_send(text: &str) -> Option<String> {
    let text = text.trim();
    if text.is_empty() || text.chars().count() >= MIN_SEARCH_LEN {
        Some(text.to_string())
    } else {
        None
    }
}

/// Whether `text` is still what the search box holds. False once the box
/// was unmounted during the debounce.
fn is_latest_input(input: RwSignal<String>, text: &str) -> bool {
    input.try_with_untracked(|current| current == text).unwrap_or(false)
}

/// Search box that reports its text after the user stops typing
#[component]
pub fn SearchInput(
    #[prop(into)]
    value: Signal<String>,
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: Option<String>,
) -> impl IntoView {
    let input_value = RwSignal::new(value.get_untracked());

    // follow "Clear all"
    Effect::new(move |_| {
        if value.with(|v| v.is_empty()) {
            input_value.set(String::new());
        }
    });

    let handle_input = move |text: String| {
        input_value.set(text.clone());
        spawn_local(async move {
            TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            // superseded by a newer keystroke, or the list is gone
            if !is_latest_input(input_value, &text) {
                return;
            }
            if let Some(search) = search_to_send(&text) {
                on_change.run(search);
            }
        });
    };

    view! {
        <input
            type="search"
            class="filter-control filter-control--search"
            placeholder=placeholder.unwrap_or_else(|| "Search...".to_string())
            prop:value=move || input_value.get()
            on:input=move |ev| handle_input(event_target_value(&ev))
        />
    }
}

/// One control per filter option plus the sort selector.
///
/// Every change is reported with the option `value` as key, exactly as the
/// server expects it.
#[component]
pub fn FilterControls(
    options: &'static [FilterOption],
    sort_options: &'static [SortOption],
    #[prop(into)]
    values: Signal<BTreeMap<String, String>>,
    #[prop(into)]
    sort: Signal<Option<String>>,
    #[prop(into)]
    direction: Signal<SortDirection>,
    /// (filter key, new value); an empty value clears the filter
    on_filter: Callback<(String, String)>,
    on_sort: Callback<String>,
    on_toggle_direction: Callback<()>,
) -> impl IntoView {
    let current = move |key: &'static str| {
        move || values.with(|v| v.get(key).cloned().unwrap_or_default())
    };

    let controls = options
        .iter()
        .map(|option| {
            let key = option.value;
            let report = move |ev: leptos::ev::Event| {
                on_filter.run((key.to_string(), event_target_value(&ev)));
            };
            let control = match option.control {
                FilterControl::Select { options: choices } => view! {
                    <select class="filter-control" on:change=report prop:value=current(key)>
                        <option value="">{option.placeholder}</option>
                        {choices.iter().map(|choice| view! {
                            <option value=choice.value>{choice.label}</option>
                        }).collect_view()}
                    </select>
                }
                .into_any(),
                FilterControl::Date => view! {
                    <input
                        type="date"
                        class="filter-control"
                        placeholder=option.placeholder
                        prop:value=current(key)
                        on:change=report
                    />
                }
                .into_any(),
                FilterControl::Text => view! {
                    <input
                        type="text"
                        class="filter-control"
                        placeholder=option.placeholder
                        prop:value=current(key)
                        on:change=report
                    />
                }
                .into_any(),
            };
            view! {
                <label class="filter-field">
                    <span class="filter-field__label">{option.label}</span>
                    {control}
                </label>
            }
        })
        .collect_view();

    view! {
        <div class="filter-controls">
            {controls}
            <label class="filter-field">
                <span class="filter-field__label">"Sort by"</span>
                <select
                    class="filter-control"
                    prop:value=move || sort.get().unwrap_or_default()
                    on:change=move |ev| {
                        let field = event_target_value(&ev);
                        if !field.is_empty() {
                            on_sort.run(field);
                        }
                    }
                >
                    <option value="">"Default"</option>
                    {sort_options.iter().map(|o| view! {
                        <option value=o.value>{o.label}</option>
                    }).collect_view()}
                </select>
            </label>
            <button
                class="filter-control filter-control--direction"
                title="Toggle sort direction"
                disabled=move || sort.with(|s| s.is_none())
                on:click=move |_| on_toggle_direction.run(())
            >
                {move || match direction.get() {
                    SortDirection::Asc => "Ascending",
                    SortDirection::Desc => "Descending",
                }}
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_to_send() {
        assert_eq!(search_to_send("  "), Some(String::new()));
        assert_eq!(search_to_send("a"), None);
        assert_eq!(search_to_send(" acme "), Some("acme".to_string()));
    }

    #[test]
    fn test_debounced_input_after_unmount() {
        let list = Owner::new();
        let input = list.with(|| RwSignal::new(String::from("acme")));
        assert!(is_latest_input(input, "acme"));
        assert!(!is_latest_input(input, "acm"));

        list.cleanup();
        assert!(!is_latest_input(input, "acme"));
    }
}
