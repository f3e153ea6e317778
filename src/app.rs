use dioxus::prelude::*;

use crate::components::{DeviceTrackingMap, Header, KpiCard, Navbar, Sidebar};
use crate::shared::data::{bin_updates, KPI_DATA, SECONDARY_STATS, SYSTEM_QUICK_STATS};
use crate::{FAVICON, TAILWIND_CSS};

#[allow(non_snake_case)]
#[component]
pub fn App() -> Element {
    let collapsed = use_signal(|| false);
    let content_margin = if collapsed() { "ml-16" } else { "ml-52" };

    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Stylesheet { href: TAILWIND_CSS }
        document::Meta { name: "theme-color", content: "#151a29" }
        document::Meta { name: "color-scheme", content: "dark" }
        div { class: "h-screen flex flex-col bg-background overflow-hidden",
            Navbar {}
            div { class: "flex flex-1 overflow-hidden pt-22",
                Sidebar { collapsed }
                div { class: "flex flex-col flex-1 overflow-hidden transition-all duration-300 ease-in-out {content_margin}",
                    main { class: "flex-1 overflow-y-auto",
                        div { class: "p-6 space-y-8",
                            Header {}
                            // Primary KPIs
                            div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6",
                                for kpi in KPI_DATA.iter() {
                                    KpiCard { key: "{kpi.title}", metric: kpi.clone() }
                                }
                            }
                            div { class: "grid grid-cols-1 lg:grid-cols-3 gap-6",
                                div { class: "lg:col-span-2",
                                    h3 { class: "text-xl font-bold text-text mb-4", "System Metrics" }
                                    div { class: "grid grid-cols-1 md:grid-cols-3 gap-6",
                                        for stat in SECONDARY_STATS.iter() {
                                            KpiCard { key: "{stat.title}", metric: stat.clone() }
                                        }
                                    }
                                }
                                div { class: "p-6 bg-surface border border-border rounded-xl",
                                    h4 { class: "text-lg font-bold text-text mb-4", "Quick Stats" }
                                    div { class: "space-y-4",
                                        for q in SYSTEM_QUICK_STATS.iter() {
                                            div { key: "{q.label}", class: "space-y-2",
                                                div { class: "flex justify-between items-center",
                                                    span { class: "text-sm text-textTertiary", "{q.label}" }
                                                    span { class: "text-lg font-semibold {q.tone.text_class()}", "{q.value}" }
                                                }
                                                div { class: "w-full h-1 bg-hover rounded-full overflow-hidden",
                                                    div { class: "h-full bg-gradient-to-r from-accent to-info", style: "width: {q.percent}%" }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                            div {
                                h3 { class: "text-xl font-bold text-text mb-4", "Recent Activity" }
                                div { class: "p-6 bg-surface border border-border rounded-xl space-y-3",
                                    for (message, time) in bin_updates() {
                                        div { key: "{message}", class: "flex items-center justify-between p-3 rounded-lg hover:bg-hover transition-colors",
                                            div { class: "flex items-center gap-3 flex-1",
                                                div { class: "w-2 h-2 rounded-full bg-accent" }
                                                div {
                                                    p { class: "text-sm font-medium text-text", "{message}" }
                                                    p { class: "text-xs text-textTertiary", "{time}" }
                                                }
                                            }
                                            span { class: "text-xs px-2.5 py-1 rounded-full bg-accentBg text-accent font-semibold", "Updated" }
                                        }
                                    }
                                }
                            }
                            DeviceTrackingMap {}
                        }
                    }
                }
            }
        }
    }
}
