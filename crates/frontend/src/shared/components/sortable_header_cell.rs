//! Sortable table header cell with a direction indicator.

use leptos::prelude::*;
use thaw::*;

/// Indicator glyph for a header: arrows on the active field, a neutral
/// glyph everywhere else.
pub fn sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

pub fn sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "table__header-sort-indicator table__header-sort-indicator--active"
    } else {
        "table__header-sort-indicator"
    }
}

/// Header cell that reports sort clicks for one field.
#[component]
pub fn SortableHeaderCell(
    /// Header text
    #[prop(into)]
    label: String,
    /// Field this column sorts by
    #[prop(into)]
    sort_field: String,
    /// Active sort field from the table's view state
    #[prop(into)]
    current_sort_field: Signal<String>,
    /// Active sort direction from the table's view state
    #[prop(into)]
    sort_ascending: Signal<bool>,
    /// Called with the field name on click
    on_sort: Callback<String>,
    /// Minimum column width
    #[prop(optional, default = 100.0)]
    min_width: f64,
    /// Header alignment (left/right)
    #[prop(optional, default = "left")]
    align: &'static str,
) -> impl IntoView {
    let sort_field_for_click = sort_field.clone();
    let sort_field_for_indicator = sort_field.clone();
    let sort_field_for_class = sort_field.clone();

    let handle_click = move |_| {
        on_sort.run(sort_field_for_click.clone());
    };

    let header_style = if align == "right" {
        "cursor: pointer; justify-content: flex-end; padding-right: 12px;"
    } else {
        "cursor: pointer; padding-right: 12px;"
    };

    view! {
        <TableHeaderCell resizable=false min_width=min_width>
            <div
                class="table__sortable-header"
                style=header_style
                on:click=handle_click
            >
                {label}
                <span class=move || {
                    sort_class(&current_sort_field.get(), &sort_field_for_class)
                }>
                    {move || {
                        sort_indicator(
                            &current_sort_field.get(),
                            &sort_field_for_indicator,
                            sort_ascending.get(),
                        )
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
    fn indicator_tracks_active_field_and_direction() {
        assert_eq!(sort_indicator("difference", "difference", true), " ▲");
        assert_eq!(sort_indicator("difference", "difference", false), " ▼");
        assert_eq!(sort_indicator("difference", "city", true), " ⇅");
    }
}
