use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TooltipSide {
    Top,
    Right,
}

impl TooltipSide {
    fn class(self) -> &'static str {
        match self {
            TooltipSide::Top => "bottom-full left-1/2 -translate-x-1/2 mb-2",
            TooltipSide::Right => "left-full top-1/2 -translate-y-1/2 ml-3",
        }
    }
}

/// Hover label around arbitrary content. Visibility is local to each instance.
#[allow(non_snake_case)]
#[component]
pub fn Tooltip(content: String, side: TooltipSide, children: Element) -> Element {
    let mut visible = use_signal(|| false);
    let side_class = side.class();

    rsx! {
        div { class: "relative inline-flex w-full",
            onmouseenter: move |_| visible.set(true),
            onmouseleave: move |_| visible.set(false),
            onfocusin: move |_| visible.set(true),
            onfocusout: move |_| visible.set(false),
            {children}
            if visible() {
                div { class: "pointer-events-none absolute z-50 whitespace-nowrap rounded-md border border-border bg-background px-2.5 py-1.5 text-xs font-medium text-text shadow-lg {side_class}",
                    role: "tooltip",
                    "{content}"
                }
            }
        }
    }
}
