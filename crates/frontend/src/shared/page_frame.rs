//! PageFrame: root wrapper of every list page.
//!
//! The root element gets `id="{resource}--list"` so pages can be told apart
//! in the DOM.

use leptos::prelude::*;

#[component]
pub fn PageFrame(
    /// Resource of the page, e.g. `"activity-logs"`
    page_id: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div id=format!("{page_id}--list") class="page" data-page-category="list">
            {children()}
        </div>
    }
}
