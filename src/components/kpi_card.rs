use dioxus::prelude::*;

use crate::shared::types::{KpiMetric, Trend};
use crate::utils::format::format_trend;

#[allow(non_snake_case)]
#[component]
pub fn KpiCard(metric: KpiMetric) -> Element {
    let (trend_class, trend_arrow) = match metric.trend {
        Trend::Up => ("text-success", "↗"),
        Trend::Down => ("text-error", "↘"),
    };
    let trend_label = format_trend(metric.trend, metric.trend_value);
    let icon_class = metric.tone.text_class();

    rsx! {
        div { class: "group relative overflow-hidden rounded-2xl border border-border bg-surface p-6 shadow-xl transition-transform duration-200 hover:-translate-y-2",
            div { class: "flex items-start justify-between mb-4",
                span { class: "text-xs uppercase font-semibold tracking-wider text-textTertiary", "{metric.title}" }
                span { class: "p-2 rounded-lg bg-accentBg text-lg {icon_class} transition-transform group-hover:scale-110 group-hover:rotate-6", "{metric.icon}" }
            }
            div { class: "flex items-baseline gap-1",
                span { class: "text-3xl font-bold text-text tabular-nums", "{metric.value}" }
                if let Some(unit) = metric.unit {
                    span { class: "text-lg text-textSecondary", "{unit}" }
                }
            }
            div { class: "mt-3 flex items-center gap-2 text-xs",
                span { class: "font-semibold {trend_class}", "{trend_arrow} {trend_label}" }
                span { class: "text-textTertiary", "{metric.description}" }
            }
        }
    }
}
