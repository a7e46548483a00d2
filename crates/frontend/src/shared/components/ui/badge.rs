use contracts::shared::table::BadgeTone;
use leptos::prelude::*;

/// Badge component with a tone taken from the cell value
#[component]
pub fn Badge(
    /// Badge tone, neutral by default
    #[prop(optional)]
    tone: Option<BadgeTone>,
    /// Badge content
    children: Children,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let tone_class = tone.unwrap_or(BadgeTone::Neutral).css_class();
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("badge {} {}", tone_class, additional_class())>
            {children()}
        </span>
    }
}
