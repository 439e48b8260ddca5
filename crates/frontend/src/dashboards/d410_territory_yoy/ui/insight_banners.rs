use crate::shared::icons::icon;
use crate::shared::insight_utils::classify_insight;
use leptos::prelude::*;

/// Free-text insight lines from the pipeline, classified into severity
/// banners. The text renders verbatim; only the styling is derived.
#[component]
pub fn InsightBanners(insights: Vec<String>) -> impl IntoView {
    if insights.is_empty() {
        return view! { <></> }.into_any();
    }

    view! {
        <div class="insight-list">
            {insights
                .into_iter()
                .map(|text| {
                    let severity = classify_insight(&text);
                    view! {
                        <div class=severity.css_class()>
                            <span class="insight__icon">{icon(severity.icon_name())}</span>
                            <span class="insight__text">{text}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
    .into_any()
}
