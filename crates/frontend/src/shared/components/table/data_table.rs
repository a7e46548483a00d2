//! Generic table over a column set
//!
//! Renders exactly the rows it is given, in the given order. Sorting,
//! filtering and paging are the server's business.

use contracts::shared::list_options::SortOption;
use contracts::shared::list_query::SortDirection;
use contracts::shared::table::{ColumnSet, DeleteTrigger};
use contracts::CrmEntity;
use leptos::prelude::*;
use thaw::*;

use super::sortable_header_cell::SortableHeaderCell;
use super::table_cell_value::TableCellValue;

/// Callbacks and sort state shared by all rows of a table
#[derive(Clone, Copy)]
pub struct TableHandlers {
    pub on_edit: Callback<i64>,
    pub on_request_delete: Callback<DeleteTrigger>,
    pub on_sort: Callback<String>,
    pub current_sort: Signal<Option<String>>,
    pub direction: Signal<SortDirection>,
}

fn header_view(label: &'static str, class: Option<&'static str>, sort: Option<&SortOption>, h: TableHandlers) -> AnyView {
    match sort {
        Some(option) => view! {
            <SortableHeaderCell
                label=label
                sort_field=option.value
                current_sort=h.current_sort
                direction=h.direction
                on_sort=h.on_sort
                class=class.unwrap_or_default()
            />
        }
        .into_any(),
        None => view! {
            <TableHeaderCell class=class.unwrap_or_default().to_string()>{label}</TableHeaderCell>
        }
        .into_any(),
    }
}

/// Table of `rows` laid out by `columns`.
///
/// A header becomes sortable when one of `sort_options` carries the same
/// label as the column.
pub fn data_table<T: CrmEntity>(
    table_id: &'static str,
    columns: &ColumnSet<T>,
    rows: &[T],
    sort_options: &'static [SortOption],
    handlers: TableHandlers,
) -> AnyView {
    let headers = columns
        .iter()
        .map(|column| {
            let sort = sort_options.iter().find(|o| o.label == column.label());
            header_view(column.label(), column.class_name(), sort, handlers)
        })
        .collect_view();

    let body = rows
        .iter()
        .map(|record| {
            let cells = columns
                .iter()
                .map(|column| {
                    view! {
                        <TableCellValue
                            cell=column.render(record)
                            class=column.class_name().unwrap_or_default()
                            on_edit=handlers.on_edit
                            on_request_delete=handlers.on_request_delete
                        />
                    }
                })
                .collect_view();
            view! { <TableRow attr:data-id=record.id().to_string()>{cells}</TableRow> }
        })
        .collect_view();

    view! {
        <div class="table-wrapper">
            <Table attr:id=table_id attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>{headers}</TableRow>
                </TableHeader>
                <TableBody>{body}</TableBody>
            </Table>
        </div>
    }
    .into_any()
}
