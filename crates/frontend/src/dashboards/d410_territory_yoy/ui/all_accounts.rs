use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::modal_frame::ModalFrame;
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::show_more_controls::ShowMoreControls;
use crate::shared::components::sortable_header_cell::SortableHeaderCell;
use crate::shared::icons::icon;
use crate::shared::list_view::{apply_view, TableFlavor, ViewState};
use crate::shared::number_format::{format_currency, format_signed_currency};
use contracts::dashboards::d410_territory_yoy::{AccountRecord, AccountStatus, AccountWithStatus};
use leptos::prelude::*;
use std::collections::BTreeSet;
use thaw::*;

fn status_badge(status: AccountStatus) -> AnyView {
    let color = match status {
        AccountStatus::Increasing => BadgeColor::Success,
        AccountStatus::Declining => BadgeColor::Warning,
        AccountStatus::New => BadgeColor::Brand,
        AccountStatus::Reactivated => BadgeColor::Subtle,
    };
    view! {
        <Badge appearance=BadgeAppearance::Tint color=color>
            {status.label()}
        </Badge>
    }
    .into_any()
}

/// Modal listing every account across the four status buckets.
#[component]
pub fn AllAccountsModal(
    /// Merged bucket rows
    accounts: Vec<AccountWithStatus>,
    on_close: Callback<()>,
    /// Row click opens the account drill-down on top of this modal
    on_select: Callback<AccountRecord>,
) -> impl IntoView {
    let cities: Vec<String> = accounts
        .iter()
        .map(|r| r.account.city.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let accounts = StoredValue::new(accounts);
    let state = RwSignal::new(ViewState::new("difference", TableFlavor::Standard));
    let filter_expanded = RwSignal::new(false);

    let outcome = Memo::new(move |_| accounts.with_value(|rs| apply_view(rs, &state.get())));

    let toggle_sort = move |field: String| {
        state.update(|st| st.toggle_sort(&field, TableFlavor::Standard));
    };

    let current_sort_field = Signal::derive(move || state.get().sort_field.clone());
    let sort_ascending = Signal::derive(move || state.get().sort_ascending);

    let active_tags = Signal::derive(move || {
        let st = state.get();
        let mut tags: Vec<String> = st.cities.iter().cloned().collect();
        if !st.search.trim().is_empty() {
            tags.push(format!("\"{}\"", st.search.trim()));
        }
        tags
    });

    let remove_tag = Callback::new(move |label: String| {
        state.update(|st| {
            if st.cities.contains(&label) {
                st.toggle_city(&label);
            } else {
                st.set_search(String::new());
            }
        });
    });

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
        <ModalFrame
            on_close=on_close
            modal_style="width: min(960px, 92vw); max-height: 85vh; overflow-y: auto; padding: 16px;".to_string()
        >
            <div class="modal__header">
                <div class="modal__title">
                    {icon("list")}
                    <h2>"All Accounts"</h2>
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                        {move || outcome.get().matched.to_string()}
                    </Badge>
                </div>
                <div class="modal__header-actions">
                    <SearchInput
                        value=Signal::derive(move || state.get().search.clone())
                        on_change=Callback::new(move |text| state.update(|st| st.set_search(text)))
                        placeholder="Search name or city..."
                    />
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| on_close.run(())
                    >
                        {icon("x")}
                    </Button>
                </div>
            </div>

            <FilterPanel
                is_expanded=filter_expanded
                active_filters_count=Signal::derive(move || state.get().active_filter_count())
                tags=active_tags
                on_remove_tag=remove_tag
            >
                <div class="city-filter">
                    {cities
                        .iter()
                        .map(|city| {
                            let city_for_checked = city.clone();
                            let city_for_toggle = city.clone();
                            let city_label = city.clone();
                            view! {
                                <label class="city-filter__option">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || {
                                            state.with(|st| st.cities.contains(&city_for_checked))
                                        }
                                        on:change=move |_| {
                                            state.update(|st| st.toggle_city(&city_for_toggle))
                                        }
                                    />
                                    <span>{city_label}</span>
                                </label>
                            }
                        })
                        .collect_view()}
                </div>
            </FilterPanel>

            <div style="width: 100%; overflow-x: auto;">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            {header_cell("#", "customer_id", 70.0)}
                            {header_cell("Customer", "name", 200.0)}
                            {header_cell("City", "city", 120.0)}
                            {header_cell("Status", "status", 110.0)}
                            {header_cell("CY Total", "cy_total", 100.0)}
                            {header_cell("PY Total", "py_total", 100.0)}
                            {header_cell("Difference", "difference", 100.0)}
                        </TableRow>
                    </TableHeader>

                    <TableBody>
                        {move || {
                            let out = outcome.get();
                            if out.rows.is_empty() {
                                let message = if out.total == 0 {
                                    "No accounts in this snapshot".to_string()
                                } else {
                                    format!("0 of {} accounts match the current filters", out.total)
                                };
                                return view! {
                                    <TableRow>
                                        <TableCell attr:colspan="7">
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
                                    let account_for_click = row.account.clone();
                                    let difference = row.account.difference();
                                    let diff_class = if difference < 0.0 {
                                        "table__cell--num table__cell--negative"
                                    } else {
                                        "table__cell--num table__cell--positive"
                                    };

                                    view! {
                                        <TableRow
                                            attr:style="cursor: pointer;"
                                            on:click=move |_| on_select.run(account_for_click.clone())
                                        >
                                            <TableCell>
                                                <TableCellLayout>
                                                    {row.account.customer_id.to_string()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {row.account.name.clone()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {row.account.city.clone()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {status_badge(row.status)}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class="table__cell--num">
                                                        {format_currency(row.account.cy_total)}
                                                    </span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class="table__cell--num">
                                                        {format_currency(row.account.py_total)}
                                                    </span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class=diff_class>
                                                        {format_signed_currency(difference)}
                                                    </span>
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
        </ModalFrame>
    }
}
