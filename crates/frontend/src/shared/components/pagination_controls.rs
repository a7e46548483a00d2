use contracts::shared::pagination::PageLink;
use leptos::prelude::*;

use crate::shared::config::PAGE_SIZE_OPTIONS;

/// PaginationControls component - pager built from the envelope links
///
/// Renders the server links as they come: disabled when the link has no
/// url, highlighted when active.
#[component]
pub fn PaginationControls(
    /// Links of the current envelope
    #[prop(into)]
    links: Signal<Vec<PageLink>>,

    /// "Showing X–Y of Z", absent for empty results
    #[prop(into)]
    summary: Signal<Option<String>>,

    /// Current page size
    #[prop(into)]
    per_page: Signal<u32>,

    /// Callback with the page number of the clicked link
    on_page_change: Callback<u32>,

    /// Callback when page size changes
    on_per_page_change: Callback<u32>,
) -> impl IntoView {

    view! {
        <div class="pagination-controls">
            <span class="pagination-info">
                {move || summary.get().unwrap_or_default()}
            </span>
            {move || {
                links
                    .get()
                    .into_iter()
                    .map(|link| {
                        let page = link.page();
                        let class = if link.active {
                            "pagination-btn pagination-btn--active"
                        } else {
                            "pagination-btn"
                        };
                        view! {
                            <button
                                class=class
                                disabled=link.is_disabled() || link.active
                                on:click=move |_| {
                                    if let Some(page) = page {
                                        on_page_change.run(page);
                                    }
                                }
                            >
                                {link.display_label()}
                            </button>
                        }
                    })
                    .collect_view()
            }}
            <select
                class="page-size-select"
                on:change=move |ev| {
                    if let Ok(val) = event_target_value(&ev).parse::<u32>() {
                        on_per_page_change.run(val);
                    }
                }
                prop:value=move || per_page.get().to_string()
            >
                {PAGE_SIZE_OPTIONS.iter().map(|&size| {
                    view! {
                        <option value={size.to_string()} selected=move || per_page.get() == size>
                            {format!("{} / page", size)}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
