use dioxus::logger::tracing::info;
use dioxus::prelude::*;

#[allow(non_snake_case)]
#[component]
pub fn Header() -> Element {
    let mut filter_active = use_signal(|| false);
    let filter_class = if filter_active() {
        "bg-accent text-background shadow-lg"
    } else {
        "bg-surface text-textSecondary hover:bg-hover border border-border"
    };

    rsx! {
        div { class: "flex justify-between items-center",
            div {
                h2 { class: "text-3xl font-bold text-text", "Dashboard" }
                p { class: "text-sm text-textTertiary mt-1", "Welcome back! Here's your system overview." }
            }
            div { class: "flex items-center gap-3",
                button { class: "flex items-center gap-2 px-4 py-2.5 rounded-lg font-medium text-sm transition-all duration-200 hover:-translate-y-0.5 {filter_class}",
                    "aria-pressed": "{filter_active()}",
                    onclick: move |_| filter_active.set(!filter_active()),
                    span { "⏷" }
                    span { "Filter" }
                }
                // No export target exists yet; the button only records the click.
                button { class: "flex items-center gap-2 px-4 py-2.5 rounded-lg font-medium text-sm transition-all duration-200 hover:-translate-y-0.5 bg-accent text-background shadow-md border border-accent",
                    onclick: move |_| info!("[header] export requested"),
                    span { "⭳" }
                    span { "Export" }
                }
            }
        }
    }
}
