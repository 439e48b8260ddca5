use crate::shared::icons::icon;
use leptos::prelude::*;

/// Collapsible filter panel shared by the list tables. The children are
/// the filter form fields; active filters render as removable chips.
#[component]
pub fn FilterPanel(
    /// Whether the filter panel is expanded
    #[prop(into)]
    is_expanded: RwSignal<bool>,
    /// Number of active filters (for badge display)
    #[prop(into)]
    active_filters_count: Signal<usize>,
    /// Active filter chip labels
    #[prop(optional, into)]
    tags: Option<Signal<Vec<String>>>,
    /// Called with the chip label when its remove glyph is clicked
    #[prop(optional, into)]
    on_remove_tag: Option<Callback<String>>,
    children: Children,
) -> impl IntoView {
    let toggle_expanded = move |_| {
        is_expanded.update(|e| *e = !*e);
    };

    let tags_view = move || {
        let (Some(tags), Some(on_remove_tag)) = (tags, on_remove_tag) else {
            return view! { <></> }.into_any();
        };
        let labels = tags.get();
        if labels.is_empty() {
            return view! { <></> }.into_any();
        }
        view! {
            <div class="filter-panel__tags">
                {labels
                    .into_iter()
                    .map(|label| {
                        let label_for_remove = label.clone();
                        view! {
                            <FilterTag
                                label=label
                                on_remove=Callback::new(move |_| {
                                    on_remove_tag.run(label_for_remove.clone())
                                })
                            />
                        }
                    })
                    .collect_view()}
            </div>
        }
        .into_any()
    };

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div
                    class="filter-panel-header__left"
                    on:click=toggle_expanded
                >
                    <svg
                        width="16"
                        height="16"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="currentColor"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                        class=move || {
                            if is_expanded.get() {
                                "filter-panel__chevron filter-panel__chevron--expanded"
                            } else {
                                "filter-panel__chevron"
                            }
                        }
                    >
                        <polyline points="6 9 12 15 18 9"></polyline>
                    </svg>
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
            </div>

            <div class=move || {
                if is_expanded.get() {
                    "filter-panel__collapsible filter-panel__collapsible--expanded"
                } else {
                    "filter-panel__collapsible filter-panel__collapsible--collapsed"
                }
            }>
                <div class="filter-panel-content">
                    {children()}
                    {tags_view}
                </div>
            </div>
        </div>
    }
}

/// Individual active-filter chip with a remove affordance.
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
            <svg
                width="12"
                height="12"
                viewBox="0 0 24 24"
                fill="none"
                stroke="currentColor"
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
                class="filter-tag__remove"
                on:click=move |e| {
                    e.stop_propagation();
                    on_remove.run(());
                }
            >
                <line x1="18" y1="6" x2="6" y2="18"></line>
                <line x1="6" y1="6" x2="18" y2="18"></line>
            </svg>
        </div>
    }
}
