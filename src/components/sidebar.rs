use dioxus::prelude::*;

use crate::components::{Tooltip, TooltipSide};
use crate::shared::data::{DEFAULT_NAV_ITEM, NAV_SECTIONS};
use crate::shared::types::NavSection;

/// Left navigation. `collapsed` is owned by the page so the content area can
/// follow the width; the active item is local.
#[allow(non_snake_case)]
#[component]
pub fn Sidebar(collapsed: Signal<bool>) -> Element {
    let mut collapsed = collapsed;
    let active_item = use_signal(|| DEFAULT_NAV_ITEM.to_string());
    let is_collapsed = collapsed();

    let width_class = if is_collapsed { "w-16" } else { "w-52" };
    let spacing_class = if is_collapsed { "space-y-6" } else { "space-y-8" };
    let chevron = if is_collapsed { "›" } else { "‹" };

    rsx! {
        aside { class: "fixed left-0 top-22 z-40 flex flex-col overflow-visible bg-background text-text transition-all duration-300 ease-in-out {width_class}",
            style: "height: calc(100vh - 5.5rem)",
            div { class: "flex items-center justify-between px-4",
                if !is_collapsed {
                    div { class: "flex min-w-0 items-center gap-3 overflow-hidden",
                        div { class: "p-2 bg-accent rounded-lg flex-shrink-0" }
                        span { class: "text-xs text-textTertiary", "Super Admin" }
                    }
                }
                button { class: "p-1.5 hover:bg-hover rounded-lg transition-colors flex-shrink-0 text-muted text-xl",
                    "aria-label": "Toggle sidebar",
                    onclick: move |_| collapsed.set(!is_collapsed),
                    "{chevron}"
                }
            }
            nav { class: "flex-1 overflow-y-auto px-3 py-6 {spacing_class}",
                for section in NAV_SECTIONS.iter() {
                    SidebarSection {
                        key: "{section.title}",
                        section: section.clone(),
                        collapsed: is_collapsed,
                        active_item,
                    }
                }
            }
        }
    }
}

#[allow(non_snake_case)]
#[component]
fn SidebarSection(section: NavSection, collapsed: bool, active_item: Signal<String>) -> Element {
    rsx! {
        div {
            if collapsed {
                div { class: "flex justify-center mb-2 text-textTertiary", "{section.icon}" }
            } else {
                div { class: "flex items-center gap-2 px-3 mb-2",
                    span { class: "text-textTertiary", "{section.icon}" }
                    h4 { class: "text-[10px] font-bold tracking-widest text-textTertiary", "{section.title}" }
                }
            }
            ul { class: "space-y-1",
                for item in section.items.iter() {
                    li { key: "{item.label}",
                        if collapsed {
                            Tooltip { content: item.label.to_string(), side: TooltipSide::Right,
                                NavButton { label: item.label, icon: item.icon, collapsed, active_item }
                            }
                        } else {
                            NavButton { label: item.label, icon: item.icon, collapsed, active_item }
                        }
                    }
                }
            }
        }
    }
}

#[allow(non_snake_case)]
#[component]
fn NavButton(
    label: &'static str,
    icon: &'static str,
    collapsed: bool,
    active_item: Signal<String>,
) -> Element {
    let mut active_item = active_item;
    let is_active = *active_item.read() == label;
    let state_class = if is_active {
        "bg-accent text-background shadow-lg"
    } else {
        "text-textSecondary hover:bg-hover hover:text-text"
    };
    let icon_class = if is_active { "scale-110 rotate-6" } else { "" };
    let justify = if collapsed { "justify-center" } else { "" };

    rsx! {
        button { class: "w-full flex items-center gap-3 px-3 py-2.5 rounded-lg transition-all duration-200 {justify} {state_class}",
            onclick: move |_| active_item.set(label.to_string()),
            span { class: "inline-block transition-transform {icon_class}", "{icon}" }
            if !collapsed {
                span { class: "text-sm font-medium truncate", "{label}" }
            }
        }
    }
}
