use contracts::dashboards::d410_territory_yoy::TerritorySnapshot;
use wasm_bindgen::JsCast;

/// Pre-computed payload bundled next to the app by the reporting pipeline.
const SNAPSHOT_URL: &str = "assets/data/territory_snapshot.json";

/// Fetch the bundled snapshot. `Ok(None)` means the asset simply is not
/// there (fresh deployment, data not dropped yet) and the caller should
/// fall back to the upload prompt.
pub async fn fetch_snapshot() -> Result<Option<TerritorySnapshot>, String> {
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);

    let request =
        Request::new_with_str_and_init(SNAPSHOT_URL, &opts).map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| format!("{e:?}"))?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;

    if resp.status() == 404 {
        return Ok(None);
    }
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }

    let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{e:?}"))?;
    let text: String = text.as_string().ok_or_else(|| "bad text".to_string())?;

    TerritorySnapshot::from_json(&text)
        .map(Some)
        .map_err(|e| format!("{e:#}"))
}
