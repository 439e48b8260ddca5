use super::api;
use contracts::dashboards::d410_territory_yoy::TerritorySnapshot;
use leptos::prelude::*;

/// App-wide handle to the loaded snapshot.
///
/// The payload itself is immutable once loaded; the only lifecycle is
/// load (bundled asset) and replace (user upload), both of which swap the
/// whole value at once.
#[derive(Clone, Copy)]
pub struct SnapshotContext {
    pub snapshot: RwSignal<Option<TerritorySnapshot>>,
    pub loading: RwSignal<bool>,
    pub load_error: RwSignal<Option<String>>,
}

impl SnapshotContext {
    pub fn new() -> Self {
        Self {
            snapshot: RwSignal::new(None),
            loading: RwSignal::new(false),
            load_error: RwSignal::new(None),
        }
    }

    /// Fetch the bundled snapshot asset. A missing asset is not an error
    /// surface: the dashboard renders the upload prompt instead.
    pub fn load(self) {
        self.loading.set(true);
        self.load_error.set(None);
        leptos::task::spawn_local(async move {
            match api::fetch_snapshot().await {
                Ok(Some(snapshot)) => self.snapshot.set(Some(snapshot)),
                Ok(None) => {
                    log::info!("no bundled snapshot asset; waiting for upload");
                }
                Err(e) => {
                    log::error!("failed to load territory snapshot: {}", e);
                    self.load_error.set(Some(e));
                }
            }
            self.loading.set(false);
        });
    }

    /// Swap in a freshly uploaded payload.
    pub fn replace(self, snapshot: TerritorySnapshot) {
        self.load_error.set(None);
        self.snapshot.set(Some(snapshot));
    }

    pub fn replace_from_json(self, raw: &str) {
        match TerritorySnapshot::from_json(raw) {
            Ok(snapshot) => self.replace(snapshot),
            Err(e) => self.load_error.set(Some(format!("{e:#}"))),
        }
    }
}
