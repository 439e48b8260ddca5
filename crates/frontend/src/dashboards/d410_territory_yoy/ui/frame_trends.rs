use crate::shared::icons::icon;
use crate::shared::number_format::{format_int, format_percent, format_signed_int};
use contracts::dashboards::d410_territory_yoy::{FrameCategoryRecord, FrameTrends};
use leptos::prelude::*;

/// Which comparison period the trend bars are scaled against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum YearView {
    Current,
    Previous,
}

/// Frame-category trends: growing/declining bucket panels with unit bars
/// plus top growth/decline callouts. One two-state toggle switches the
/// bars between the current and previous year.
#[component]
pub fn FrameTrendPanels(
    frames: FrameTrends,
    current_year: i32,
    previous_year: i32,
) -> impl IntoView {
    let (year_view, set_year_view) = signal(YearView::Current);

    view! {
        <section class="frame-section">
            <div class="account-section__header">
                <div class="account-section__title">
                    {icon("layers")}
                    <h2>"Frame Category Trends"</h2>
                </div>
                <div class="frame-section__year-toggle">
                    <button
                        class=move || {
                            if year_view.get() == YearView::Current {
                                "year-toggle__btn year-toggle__btn--active"
                            } else {
                                "year-toggle__btn"
                            }
                        }
                        on:click=move |_| set_year_view.set(YearView::Current)
                    >
                        {current_year.to_string()}
                    </button>
                    <button
                        class=move || {
                            if year_view.get() == YearView::Previous {
                                "year-toggle__btn year-toggle__btn--active"
                            } else {
                                "year-toggle__btn"
                            }
                        }
                        on:click=move |_| set_year_view.set(YearView::Previous)
                    >
                        {previous_year.to_string()}
                    </button>
                </div>
            </div>

            <div class="frame-panels">
                <FrameTrendPanel
                    title="Growing Categories"
                    icon_name="trending-up"
                    records=frames.increasing.clone()
                    year_view=year_view
                />
                <FrameTrendPanel
                    title="Declining Categories"
                    icon_name="trending-down"
                    records=frames.declining.clone()
                    year_view=year_view
                />
            </div>

            <div class="frame-callouts">
                <FrameCallouts title="Top Growth" records=frames.top_growth.clone() positive=true />
                <FrameCallouts
                    title="Top Declines"
                    records=frames.top_decline.clone()
                    positive=false
                />
            </div>
        </section>
    }
}

#[component]
fn FrameTrendPanel(
    title: &'static str,
    icon_name: &'static str,
    records: Vec<FrameCategoryRecord>,
    year_view: ReadSignal<YearView>,
) -> impl IntoView {
    let records = StoredValue::new(records);

    let rows = move || {
        let view_year = year_view.get();
        records.with_value(|rs| {
            if rs.is_empty() {
                return view! {
                    <div class="frame-panel__empty">"No categories in this bucket"</div>
                }
                .into_any();
            }

            let units_of = |r: &FrameCategoryRecord| match view_year {
                YearView::Current => r.cy_units,
                YearView::Previous => r.py_units,
            };
            // Bars scale against the largest row; max(1) keeps an all-zero
            // panel from dividing by zero.
            let max_units = rs.iter().map(&units_of).max().unwrap_or(0).max(1);

            rs.iter()
                .map(|record| {
                    let units = units_of(record);
                    let width = units as f64 / max_units as f64 * 100.0;
                    let change = record.change();
                    let change_class = if change < 0 {
                        "frame-row__change frame-row__change--down"
                    } else {
                        "frame-row__change frame-row__change--up"
                    };

                    view! {
                        <div class="frame-row">
                            <span class="frame-row__category">{record.category.clone()}</span>
                            <div class="frame-row__bar">
                                <div
                                    class="frame-row__bar-fill"
                                    style=format!("width: {:.1}%;", width)
                                ></div>
                            </div>
                            <span class="frame-row__units">{format_int(units)}</span>
                            <span class=change_class>
                                {format!(
                                    "{} ({})",
                                    format_signed_int(change),
                                    format_percent(record.pct_change(), 1),
                                )}
                            </span>
                        </div>
                    }
                })
                .collect_view()
                .into_any()
        })
    };

    view! {
        <div class="frame-panel">
            <h3 class="frame-panel__title">{icon(icon_name)}{title}</h3>
            {rows}
        </div>
    }
}

#[component]
fn FrameCallouts(
    title: &'static str,
    records: Vec<FrameCategoryRecord>,
    positive: bool,
) -> impl IntoView {
    if records.is_empty() {
        return view! { <></> }.into_any();
    }

    let card_class = if positive {
        "frame-callout frame-callout--positive"
    } else {
        "frame-callout frame-callout--negative"
    };

    view! {
        <div class="frame-callout-group">
            <h4 class="frame-callout-group__title">{title}</h4>
            {records
                .into_iter()
                .map(|record| {
                    view! {
                        <div class=card_class>
                            <span class="frame-callout__category">{record.category.clone()}</span>
                            <span class="frame-callout__figures">
                                {format!(
                                    "{} units ({})",
                                    format_signed_int(record.change()),
                                    format_percent(record.pct_change(), 1),
                                )}
                            </span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
    .into_any()
}
