use crate::dashboards::d410_territory_yoy::context::SnapshotContext;
use crate::dashboards::d410_territory_yoy::ui::TerritoryDashboard;
use crate::shared::storage::NoteStoreHandle;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Snapshot context is the only app-wide state: one immutable payload
    // with an explicit load/replace lifecycle.
    provide_context(SnapshotContext::new());

    // Account notes go through an injected store so nothing below assumes
    // the browser's localStorage directly.
    provide_context(NoteStoreHandle::browser());

    view! {
        <TerritoryDashboard />
    }
}
