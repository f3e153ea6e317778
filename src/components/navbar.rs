use dioxus::prelude::*;

use crate::shared::data::LAST_UPDATED;

const PROFILE_MENU: [&str; 3] = ["Profile", "Settings", "Sign out"];

#[allow(non_snake_case)]
#[component]
pub fn Navbar() -> Element {
    let mut menu_open = use_signal(|| false);

    rsx! {
        header { class: "fixed top-0 inset-x-0 z-50 h-22 flex items-center justify-between border-b border-border bg-background px-6",
            div { class: "flex items-center gap-3",
                div { class: "grid h-10 w-10 place-items-center rounded-xl bg-accent text-background text-xl font-bold", "♻" }
                div {
                    h1 { class: "text-lg font-bold tracking-tight text-text", "BinWatch" }
                    p { class: "text-xs text-textTertiary", "Smart bin monitoring" }
                }
            }
            div { class: "flex items-center gap-6",
                span { class: "hidden md:inline text-xs text-textTertiary", "Last updated: {LAST_UPDATED}" }
                div { class: "relative",
                    button { class: "flex items-center gap-2 rounded-lg px-3 py-2 hover:bg-hover transition-colors",
                        "aria-haspopup": "menu",
                        "aria-expanded": "{menu_open()}",
                        onclick: move |_| menu_open.set(!menu_open()),
                        div { class: "grid h-8 w-8 place-items-center rounded-full bg-surface text-sm font-semibold text-accent", "SA" }
                        span { class: "text-sm text-textSecondary", "Super Admin" }
                        span { class: "text-muted text-xs", if menu_open() { "▴" } else { "▾" } }
                    }
                    if menu_open() {
                        ul { class: "absolute right-0 mt-2 w-44 overflow-hidden rounded-xl border border-border bg-surface shadow-xl",
                            role: "menu",
                            for entry in PROFILE_MENU {
                                li { key: "{entry}",
                                    button { class: "w-full px-4 py-2.5 text-left text-sm text-textSecondary hover:bg-hover hover:text-text",
                                        onclick: move |_| menu_open.set(false),
                                        "{entry}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
