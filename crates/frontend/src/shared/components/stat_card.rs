use crate::shared::icons::icon;
use crate::shared::number_format::{
    format_currency, format_int, format_number_with_decimals, format_percent,
};
use contracts::shared::indicators::{IndicatorStatus, ValueFormat};
use leptos::prelude::*;

fn format_value(val: f64, fmt: &ValueFormat) -> String {
    match fmt {
        ValueFormat::Money => format_currency(val),
        ValueFormat::Number { decimals } => format_number_with_decimals(val, *decimals),
        ValueFormat::Percent { decimals } => format_percent(val, *decimals),
        ValueFormat::Integer => format_int(val as i64),
    }
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: String,
    /// Icon name from the icon() helper
    icon_name: String,
    /// Primary numeric value (None = unavailable)
    value: Option<f64>,
    /// How to format the value
    format: ValueFormat,
    /// Visual status
    #[prop(optional, default = IndicatorStatus::Neutral)]
    status: IndicatorStatus,
    /// Change % relative to the previous period
    #[prop(optional_no_strip)]
    change_percent: Option<f64>,
    /// Optional subtitle below the value
    #[prop(optional_no_strip)]
    subtitle: Option<String>,
) -> impl IntoView {
    let status_class = match status {
        IndicatorStatus::Good => "stat-card stat-card--success",
        IndicatorStatus::Bad => "stat-card stat-card--error",
        IndicatorStatus::Warning => "stat-card stat-card--warning",
        IndicatorStatus::Neutral => "stat-card",
    };

    let formatted = match value {
        Some(v) => format_value(v, &format),
        None => "—".to_string(),
    };

    let change_view = change_percent.map(|pct| {
        let (arrow, cls) = if pct > 0.5 {
            ("\u{2191}", "stat-card__change stat-card__change--up")
        } else if pct < -0.5 {
            ("\u{2193}", "stat-card__change stat-card__change--down")
        } else {
            ("", "stat-card__change stat-card__change--flat")
        };
        let text = format!("{}{:.1}%", arrow, pct.abs());
        view! { <span class=cls>{text}</span> }
    });

    let subtitle_view = subtitle.map(|s| {
        view! { <div class="stat-card__subtitle">{s}</div> }
    });

    view! {
        <div class=status_class>
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">
                    {formatted}
                    {change_view}
                </div>
                {subtitle_view}
            </div>
        </div>
    }
}
