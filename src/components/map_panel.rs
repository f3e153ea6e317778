use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;
use std::rc::Rc;

use crate::components::{Gauge, MarkerCanvas, Tooltip, TooltipSide};
use crate::config::MapConfig;
use crate::markers::{GeoPoint, MarkerStatus, Rgb, StatusSummary, Viewport};
use crate::shared::data::{
    map_stat, LAST_UPDATED, MAP_STATS, QUICK_STATS, RECENT_ACTIVITY, ZONE_NAME,
};
use crate::shared::types::{MapStat, Tone};
use crate::utils::format::{format_count, format_lat_lng, format_share};

const CANVAS_SIZE: f64 = 480.0;

#[allow(non_snake_case)]
#[component]
pub fn DeviceTrackingMap() -> Element {
    // One snapshot per mount; never regenerated on re-render.
    let (config, points): (MapConfig, Rc<[GeoPoint]>) = use_hook(|| {
        let config = MapConfig::from_env().unwrap_or_else(|e| {
            warn!("[map] {e}; using default zone");
            MapConfig::default()
        });
        let points = config.generator().generate(&mut config.rng());
        info!("[map] generated {} bin markers", points.len());
        (config, points.into())
    });
    let mut active = use_signal(|| Option::<MarkerStatus>::None);

    let summary = StatusSummary::from_points(&points);
    let viewport = Viewport::new(config.center, config.radius, CANVAS_SIZE);
    let focus = active().and_then(|s| map_stat(s).map(|stat| (s, stat.anchor)));
    let focus_label = match focus {
        Some((status, anchor)) => format!("{} · {}", status.label(), format_lat_lng(anchor)),
        None => format!("Viewing zone: {ZONE_NAME}"),
    };
    let operational = format_share(summary.operational_share());
    let legend: Vec<(&'static str, String, String)> = config
        .categories
        .categories()
        .iter()
        .map(|c| {
            (
                c.status.label(),
                c.color.to_hex(),
                format_share(config.categories.share(c.status)),
            )
        })
        .collect();

    rsx! {
        div { class: "grid grid-cols-12 gap-6",
            div { class: "col-span-12 lg:col-span-8",
                div { class: "bg-surface rounded-2xl shadow-xl overflow-hidden border border-border",
                    div { class: "p-6 bg-gradient-to-r from-accent to-info text-background",
                        div { class: "flex items-center justify-between",
                            div {
                                h2 { class: "text-2xl font-bold mb-1", "Smart Dustbin Monitoring" }
                                p { class: "text-background/80 text-sm", "Port Harcourt, Rivers • GPS + SIM7600G-H Enabled" }
                            }
                            div { class: "w-3 h-3 bg-success rounded-full shadow-lg animate-pulse" }
                        }
                    }
                    div { class: "grid grid-cols-12 gap-6 p-6",
                        div { class: "col-span-12 md:col-span-4 space-y-4",
                            for stat in MAP_STATS.iter() {
                                StatCard {
                                    key: "{stat.id}",
                                    stat: *stat,
                                    count: summary.count(stat.status),
                                    expected: config.categories.share(stat.status),
                                    color: config.categories.color_of(stat.status),
                                    selected: active() == Some(stat.status),
                                    onselect: move |status: MarkerStatus| {
                                        let next = if active() == Some(status) { None } else { Some(status) };
                                        info!("[map] focus {:?}", next);
                                        active.set(next);
                                    },
                                }
                            }
                            div { class: "p-5 bg-hover rounded-xl border border-border mt-4",
                                div { class: "flex items-center gap-2 mb-3",
                                    span { class: "text-accent", "⚡" }
                                    span { class: "text-xs uppercase font-semibold text-textTertiary tracking-wider", "Total Containers" }
                                }
                                div { class: "flex items-center justify-between",
                                    div { class: "flex items-baseline gap-2",
                                        span { class: "text-4xl font-bold text-text", "{format_count(summary.total())}" }
                                        span { class: "text-sm text-textSecondary", "containers" }
                                    }
                                    div { class: "w-auto",
                                        Tooltip { content: "Active and available bins".to_string(), side: TooltipSide::Top,
                                            Gauge { share: summary.operational_share(), size: 72, stroke: 8, tone: Tone::Success,
                                                span { class: "text-xs font-semibold text-text tabular-nums", "{operational}" }
                                            }
                                        }
                                    }
                                }
                                p { class: "text-xs text-textSecondary font-medium mt-2", "{operational} operational" }
                            }
                        }
                        div { class: "col-span-12 md:col-span-8",
                            div { class: "relative h-[500px] rounded-xl overflow-hidden border-2 border-border shadow-inner bg-background",
                                MarkerCanvas { points: points.clone(), viewport, focus }
                                div { class: "absolute bottom-0 left-0 right-0 bg-gradient-to-t from-background/95 to-transparent p-4 border-t border-border",
                                    div { class: "flex items-center justify-between",
                                        div {
                                            p { class: "text-xs uppercase font-semibold tracking-wider text-textTertiary", "{focus_label}" }
                                            p { class: "text-sm font-medium text-text mt-1", "Last updated: {LAST_UPDATED}" }
                                            div { class: "flex flex-wrap items-center gap-3 mt-2",
                                                for (label, hex, share) in legend {
                                                    div { key: "{label}", class: "flex items-center gap-1.5 text-xs text-textSecondary",
                                                        span { class: "w-2.5 h-2.5 rounded-full", style: "background-color: {hex}" }
                                                        "{label} {share}"
                                                    }
                                                }
                                            }
                                        }
                                        if focus.is_some() {
                                            button { class: "flex items-center gap-2 px-4 py-2.5 rounded-lg bg-accent text-background font-semibold text-sm hover:shadow-lg transition-all",
                                                onclick: move |_| active.set(None),
                                                "Show all"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
            div { class: "col-span-12 lg:col-span-4",
                RecentActivity {}
            }
        }
    }
}

#[allow(non_snake_case)]
#[component]
fn StatCard(
    stat: MapStat,
    count: usize,
    expected: f64,
    color: Option<Rgb>,
    selected: bool,
    onselect: EventHandler<MarkerStatus>,
) -> Element {
    let tone = Tone::from(stat.status);
    let (container, icon_class, label_class, value_class) = if selected {
        (
            format!("{} text-background border-transparent shadow-lg", tone.bg_class()),
            "text-background",
            "text-background",
            "text-background",
        )
    } else {
        (
            "bg-surface border-border hover:border-accent".to_string(),
            tone.text_class(),
            "text-textTertiary",
            "text-text",
        )
    };
    let pulse = if selected { "animate-pulse" } else { "" };
    // A status missing from the configured table never shows up on the map.
    let swatch = color.map(|c| format!("background-color: {c}"));
    let expected = format_share(expected);

    rsx! {
        button { class: "w-full p-4 rounded-xl border-2 text-left transition-all hover:translate-x-1 {container}",
            onclick: move |_| onselect.call(stat.status),
            div { class: "flex items-center gap-3 mb-2",
                span { class: "text-lg {icon_class} {pulse}", "{stat.icon}" }
                span { class: "text-xs uppercase font-semibold tracking-wider {label_class}", "{stat.status.label()}" }
            }
            div { class: "flex items-baseline justify-between",
                div { class: "text-3xl font-bold tabular-nums {value_class}", "{count}" }
                div { class: "flex items-center gap-1.5 text-xs {label_class}",
                    if let Some(style) = swatch {
                        span { class: "w-2 h-2 rounded-full", style: "{style}" }
                    }
                    "expected {expected}"
                }
            }
        }
    }
}

#[allow(non_snake_case)]
#[component]
fn RecentActivity() -> Element {
    rsx! {
        div { class: "bg-surface rounded-2xl shadow-xl p-6 border border-border h-full",
            h3 { class: "text-xl font-bold text-text mb-4", "Recent Activity" }
            div { class: "space-y-4",
                for (i, item) in RECENT_ACTIVITY.iter().enumerate() {
                    div { key: "{i}", class: "flex items-start gap-3 p-3 rounded-lg bg-hover hover:bg-background transition-colors border border-border",
                        div { class: "w-2 h-2 rounded-full mt-2 {item.tone.bg_class()}" }
                        div { class: "flex-1",
                            p { class: "text-sm font-medium text-text", "{item.message}" }
                            p { class: "text-xs text-textTertiary mt-1", "{item.time} ago" }
                        }
                    }
                }
            }
            div { class: "mt-6 pt-6 border-t border-border",
                h4 { class: "text-lg font-bold text-text mb-4", "Quick Stats" }
                div { class: "space-y-4",
                    for q in QUICK_STATS.iter() {
                        div { key: "{q.label}", class: "space-y-2",
                            div { class: "flex justify-between items-center",
                                span { class: "text-sm text-textTertiary", "{q.label}" }
                                span { class: "text-lg font-semibold {q.tone.text_class()}", "{q.value}" }
                            }
                            div { class: "w-full h-2 bg-hover rounded-full overflow-hidden",
                                div { class: "h-full bg-gradient-to-r from-accent to-info transition-all duration-1000", style: "width: {q.percent}%" }
                            }
                        }
                    }
                }
            }
        }
    }
}
