//! Rendering of contract cell values into table cells

use contracts::shared::table::{CellValue, DeleteTrigger, RowActions, PLACEHOLDER};
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::ui::Badge;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;

fn actions_view(
    actions: RowActions,
    on_edit: Callback<i64>,
    on_request_delete: Callback<DeleteTrigger>,
) -> AnyView {
    let id = actions.record_id;
    let edit = actions.edit.then(|| {
        view! {
            <Button
                appearance=ButtonAppearance::Subtle
                on_click=move |_| on_edit.run(id)
                attr:title="Edit"
            >
                {icon("edit")}
            </Button>
        }
    });
    let delete = actions.delete.map(|trigger| {
        view! {
            <Button
                appearance=ButtonAppearance::Subtle
                on_click=move |_| on_request_delete.run(trigger.clone())
                attr:title="Delete"
            >
                {icon("delete")}
            </Button>
        }
    });

    view! { <div class="table__actions">{edit}{delete}</div> }.into_any()
}

/// Body of one table cell
pub fn cell_content(
    cell: CellValue,
    on_edit: Callback<i64>,
    on_request_delete: Callback<DeleteTrigger>,
) -> AnyView {
    match cell {
        CellValue::Text(text) => view! { <span>{text}</span> }.into_any(),
        CellValue::Placeholder => {
            view! { <span class="table__placeholder">{PLACEHOLDER}</span> }.into_any()
        }
        CellValue::Badge { text, tone } => {
            view! { <Badge tone=tone>{text}</Badge> }.into_any()
        }
        CellValue::DateTime(raw) => {
            let formatted = format_datetime(&raw);
            view! { <span title=raw>{formatted}</span> }.into_any()
        }
        CellValue::Actions(actions) => actions_view(actions, on_edit, on_request_delete),
    }
}

/// One `<td>` of a data table
#[component]
pub fn TableCellValue(
    cell: CellValue,
    #[prop(optional)]
    class: Option<&'static str>,
    on_edit: Callback<i64>,
    on_request_delete: Callback<DeleteTrigger>,
) -> impl IntoView {
    let truncate = matches!(cell, CellValue::Text(_));
    view! {
        <TableCell class=class.unwrap_or_default().to_string()>
            <TableCellLayout truncate=truncate>
                {cell_content(cell, on_edit, on_request_delete)}
            </TableCellLayout>
        </TableCell>
    }
}
