//! Sortable table header cell
//!
//! ```rust,ignore
//! <SortableHeaderCell
//!     label="Created At"
//!     sort_field="created_at"
//!     current_sort=Signal::derive(move || query.with(|q| q.sort.clone()))
//!     direction=Signal::derive(move || query.with(|q| q.direction))
//!     on_sort=Callback::new(move |field| toggle_sort(field))
//! />
//! ```

use contracts::shared::list_query::SortDirection;
use leptos::prelude::*;
use thaw::*;

/// Indicator shown next to a sortable header
pub fn sort_indicator(current: Option<&str>, field: &str, direction: SortDirection) -> &'static str {
    if current == Some(field) {
        direction.indicator()
    } else {
        " ⇅"
    }
}

pub fn sort_class(current: Option<&str>, field: &str) -> &'static str {
    if current == Some(field) {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

/// Header cell that asks the list to sort by `sort_field` when clicked
#[component]
pub fn SortableHeaderCell(
    #[prop(into)]
    label: String,

    /// Server sort key
    #[prop(into)]
    sort_field: String,

    #[prop(into)]
    current_sort: Signal<Option<String>>,

    #[prop(into)]
    direction: Signal<SortDirection>,

    on_sort: Callback<String>,

    #[prop(optional, into)]
    class: Option<String>,
) -> impl IntoView {
    let field_for_click = sort_field.clone();
    let field_for_indicator = sort_field.clone();

    view! {
        <TableHeaderCell class=class.unwrap_or_default()>
            <div
                class="table__sortable-header"
                style="cursor: pointer;"
                on:click=move |_| on_sort.run(field_for_click.clone())
            >
                {label}
                <span class=move || current_sort.with(|c| sort_class(c.as_deref(), &sort_field))>
                    {move || {
                        current_sort.with(|c| {
                            sort_indicator(c.as_deref(), &field_for_indicator, direction.get())
                        })
                    }}
                </span>
            </div>
        </TableHeaderCell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_indicator() {
        assert_eq!(sort_indicator(Some("name"), "name", SortDirection::Asc), " ▲");
        assert_eq!(sort_indicator(Some("name"), "name", SortDirection::Desc), " ▼");
        assert_eq!(sort_indicator(Some("email"), "name", SortDirection::Asc), " ⇅");
        assert_eq!(sort_indicator(None, "name", SortDirection::Asc), " ⇅");
    }
}
