use crate::dashboards::d410_territory_yoy::context::SnapshotContext;
use crate::dashboards::d410_territory_yoy::ui::account_detail::AccountDetailModal;
use crate::dashboards::d410_territory_yoy::ui::account_table::AccountTable;
use crate::dashboards::d410_territory_yoy::ui::all_accounts::AllAccountsModal;
use crate::dashboards::d410_territory_yoy::ui::brand_table::BrandTable;
use crate::dashboards::d410_territory_yoy::ui::frame_trends::FrameTrendPanels;
use crate::dashboards::d410_territory_yoy::ui::insight_banners::InsightBanners;
use crate::dashboards::d410_territory_yoy::ui::summary_cards::SummaryCards;
use crate::shared::date_utils::{format_snapshot_date, format_year_pair};
use crate::shared::icons::icon;
use crate::shared::list_view::TableFlavor;
use contracts::dashboards::d410_territory_yoy::{AccountRecord, TerritorySnapshot};
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;

/// Territory year-over-year dashboard page.
#[component]
pub fn TerritoryDashboard() -> impl IntoView {
    let ctx = use_context::<SnapshotContext>().expect("SnapshotContext context not found");

    // Kick off the bundled-asset load once on mount.
    Effect::new(move |_| {
        if ctx.snapshot.with_untracked(|s| s.is_none()) {
            ctx.load();
        }
    });

    view! {
        <div class="dashboard">
            {move || {
                if ctx.loading.get() {
                    view! {
                        <div class="dashboard__loading">
                            <span>"Loading territory data..."</span>
                        </div>
                    }
                    .into_any()
                } else {
                    view! { <></> }.into_any()
                }
            }}

            {move || {
                ctx.load_error.get().map(|e| {
                    view! {
                        <div class="warning-box warning-box--error">
                            <span class="warning-box__icon">"⚠"</span>
                            <span class="warning-box__text">{e}</span>
                        </div>
                    }
                })
            }}

            {move || {
                match ctx.snapshot.get() {
                    Some(snapshot) => view! { <DashboardBody snapshot=snapshot /> }.into_any(),
                    None => {
                        if ctx.loading.get() {
                            view! { <></> }.into_any()
                        } else {
                            view! { <UploadPrompt /> }.into_any()
                        }
                    }
                }
            }}
        </div>
    }
}

#[component]
fn DashboardBody(snapshot: TerritorySnapshot) -> impl IntoView {
    // Drill-down selection and the merged-view toggle are the only pieces
    // of state shared across sections.
    let (selected, set_selected) = signal(None::<AccountRecord>);
    let (show_all, set_show_all) = signal(false);

    let select_account = Callback::new(move |account: AccountRecord| {
        set_selected.set(Some(account));
    });

    let merged_accounts = StoredValue::new(snapshot.all_accounts());

    view! {
        <div class="dashboard__body">
            <header class="dashboard__header">
                <div>
                    <h1 class="dashboard__title">"Territory Sales Dashboard"</h1>
                    <div class="dashboard__meta">
                        <span class="dashboard__period">
                            {format_year_pair(snapshot.current_year, snapshot.previous_year)}
                        </span>
                        <span class="dashboard__generated">
                            {format!("Data through {}", format_snapshot_date(snapshot.generated_at))}
                        </span>
                    </div>
                </div>
                <div class="dashboard__header-actions">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| set_show_all.set(true)
                    >
                        {icon("list")}
                        " All accounts"
                    </Button>
                    <SnapshotUpload label="Replace data" />
                </div>
            </header>

            <SummaryCards summary=snapshot.summary.clone() />

            <InsightBanners insights=snapshot.insights.clone() />

            <div class="dashboard__tables">
                <AccountTable
                    title="Declining Customers"
                    icon_name="trending-down"
                    flavor=TableFlavor::Declining
                    records=snapshot.declining_customers.clone()
                    on_select=select_account
                />
                <AccountTable
                    title="Growing Customers"
                    icon_name="trending-up"
                    flavor=TableFlavor::Standard
                    records=snapshot.increasing_customers.clone()
                    on_select=select_account
                />
                <AccountTable
                    title="New Customers"
                    icon_name="user-plus"
                    flavor=TableFlavor::Standard
                    records=snapshot.new_customers.clone()
                    on_select=select_account
                />
                <AccountTable
                    title="Reactivated Customers"
                    icon_name="repeat"
                    flavor=TableFlavor::Standard
                    records=snapshot.reactivated_customers.clone()
                    on_select=select_account
                />
            </div>

            <BrandTable brands=snapshot.brands.clone() />

            <FrameTrendPanels
                frames=snapshot.frames.clone()
                current_year=snapshot.current_year
                previous_year=snapshot.previous_year
            />

            {move || {
                show_all.get().then(|| {
                    view! {
                        <AllAccountsModal
                            accounts=merged_accounts.get_value()
                            on_close=Callback::new(move |_| set_show_all.set(false))
                            on_select=select_account
                        />
                    }
                })
            }}

            {move || {
                selected.get().map(|account| {
                    view! {
                        <AccountDetailModal
                            account=account
                            on_close=Callback::new(move |_| set_selected.set(None))
                        />
                    }
                })
            }}
        </div>
    }
}

/// File input that swaps in a freshly uploaded snapshot payload.
#[component]
fn SnapshotUpload(#[prop(optional, into)] label: Option<&'static str>) -> impl IntoView {
    let ctx = use_context::<SnapshotContext>().expect("SnapshotContext context not found");

    let on_change = move |ev: leptos::ev::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        // Allow re-selecting the same file later.
        input.set_value("");

        leptos::task::spawn_local(async move {
            match wasm_bindgen_futures::JsFuture::from(file.text()).await {
                Ok(js) => {
                    let raw = js.as_string().unwrap_or_default();
                    ctx.replace_from_json(&raw);
                }
                Err(e) => {
                    ctx.load_error
                        .set(Some(format!("failed to read file: {e:?}")));
                }
            }
        });
    };

    view! {
        <label class="upload-button">
            {icon("upload")}
            <span>{label.unwrap_or("Load data file")}</span>
            <input
                type="file"
                accept=".json,application/json"
                style="display: none;"
                on:change=on_change
            />
        </label>
    }
}

/// Empty state shown when no snapshot is available yet.
#[component]
fn UploadPrompt() -> impl IntoView {
    view! {
        <div class="dashboard__empty">
            <div class="dashboard__empty-icon">{icon("upload")}</div>
            <h2>"No territory data loaded"</h2>
            <p>
                "Upload the monthly sales snapshot produced by the reporting "
                "pipeline to populate the dashboard."
            </p>
            <SnapshotUpload label="Upload snapshot JSON" />
        </div>
    }
}
