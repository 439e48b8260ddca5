use crate::shared::components::search_input::SearchInput;
use crate::shared::components::show_more_controls::ShowMoreControls;
use crate::shared::components::sortable_header_cell::SortableHeaderCell;
use crate::shared::icons::icon;
use crate::shared::list_view::{apply_view, TableFlavor, ViewState};
use crate::shared::number_format::{format_int, format_number_with_decimals};
use contracts::dashboards::d410_territory_yoy::BrandRecord;
use leptos::prelude::*;
use thaw::*;

/// Brand performance table: unit volume, account reach and the derived
/// average, with a unit-share bar per row.
#[component]
pub fn BrandTable(
    /// Brand rows, immutable for the lifetime of the snapshot
    brands: Vec<BrandRecord>,
) -> impl IntoView {
    // Unit share denominators are fixed per snapshot.
    let territory_units: i64 = brands.iter().map(|b| b.total_units).sum();

    let brands = StoredValue::new(brands);
    let state = RwSignal::new(ViewState::new("total_units", TableFlavor::Standard));

    let outcome = Memo::new(move |_| brands.with_value(|rs| apply_view(rs, &state.get())));

    let toggle_sort = move |field: String| {
        state.update(|st| st.toggle_sort(&field, TableFlavor::Standard));
    };

    let current_sort_field = Signal::derive(move || state.get().sort_field.clone());
    let sort_ascending = Signal::derive(move || state.get().sort_ascending);

    let header_cell = move |label: &'static str, field: &'static str, min_width: f64| {
        view! {
            <SortableHeaderCell
                label=label
                sort_field=field
                current_sort_field=current_sort_field
                sort_ascending=sort_ascending
                on_sort=Callback::new(toggle_sort)
                min_width=min_width
            />
        }
    };

    view! {
        <section class="brand-section">
            <div class="account-section__header">
                <div class="account-section__title">
                    {icon("tag")}
                    <h2>"Brand Performance"</h2>
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                        {move || outcome.get().matched.to_string()}
                    </Badge>
                </div>
                <SearchInput
                    value=Signal::derive(move || state.get().search.clone())
                    on_change=Callback::new(move |text| state.update(|st| st.set_search(text)))
                    placeholder="Search brands..."
                />
            </div>

            <div style="width: 100%; overflow-x: auto;">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            {header_cell("Brand", "brand", 180.0)}
                            {header_cell("Units", "total_units", 100.0)}
                            {header_cell("Accounts", "account_count", 100.0)}
                            {header_cell("Avg Units/Account", "avg_units", 140.0)}
                            <TableHeaderCell resizable=false min_width=180.0>"Unit Share"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>

                    <TableBody>
                        {move || {
                            let out = outcome.get();
                            if out.rows.is_empty() {
                                let message = if out.total == 0 {
                                    "No brand data in this snapshot".to_string()
                                } else {
                                    format!("0 of {} brands match the search", out.total)
                                };
                                return view! {
                                    <TableRow>
                                        <TableCell attr:colspan="5">
                                            <TableCellLayout>
                                                <span class="table__cell--muted">{message}</span>
                                            </TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                }
                                .into_any();
                            }

                            out.rows
                                .into_iter()
                                .map(|row| {
                                    // Share of territory units; zero total
                                    // renders an empty bar, never NaN.
                                    let share = if territory_units > 0 {
                                        row.total_units as f64 / territory_units as f64 * 100.0
                                    } else {
                                        0.0
                                    };
                                    let bar_style = format!(
                                        "width: {:.1}%;",
                                        share.clamp(0.0, 100.0)
                                    );
                                    let brand = row.brand.clone();
                                    let total_units = row.total_units;
                                    let account_count = row.account_count;
                                    let avg_units_per_account = row.avg_units_per_account();

                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {brand}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class="table__cell--num">
                                                        {format_int(total_units)}
                                                    </span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class="table__cell--num">
                                                        {format_int(i64::from(account_count))}
                                                    </span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class="table__cell--num">
                                                        {format_number_with_decimals(
                                                            avg_units_per_account,
                                                            1,
                                                        )}
                                                    </span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <div class="share-bar">
                                                        <div class="share-bar__fill" style=bar_style></div>
                                                        <span class="share-bar__label">
                                                            {format!("{:.1}%", share)}
                                                        </span>
                                                    </div>
                                                </TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }}
                    </TableBody>
                </Table>
            </div>

            <ShowMoreControls
                shown=Signal::derive(move || state.get().visible_rows)
                matched=Signal::derive(move || outcome.get().matched)
                total=Signal::derive(move || outcome.get().total)
                on_show_more=Callback::new(move |_| {
                    let matched = outcome.get_untracked().matched;
                    state.update(|st| st.show_more(matched));
                })
                on_show_less=Callback::new(move |_| state.update(|st| st.show_less()))
            />
        </section>
    }
}
