use dioxus::prelude::*;

use crate::shared::types::Tone;

/// SVG path for a circular arc between two angles in degrees, clockwise
/// from the positive x axis.
pub fn arc_path(cx: f32, cy: f32, r: f32, a0: f32, a1: f32) -> String {
    let polar = |ang: f32| {
        let rad = ang.to_radians();
        (cx + r * rad.cos(), cy + r * rad.sin())
    };
    let (x0, y0) = polar(a0);
    let (x1, y1) = polar(a1);
    let large_arc = if (a1 - a0).abs() >= 180.0 { 1 } else { 0 };
    let sweep = if a1 >= a0 { 1 } else { 0 };
    format!("M {x0:.3} {y0:.3} A {r:.3} {r:.3} 0 {large_arc} {sweep} {x1:.3} {y1:.3}")
}

/// Ring gauge filled to `share` (0..=1), opening at the bottom.
#[allow(non_snake_case)]
#[component]
pub fn Gauge(share: f64, size: i32, stroke: i32, tone: Tone, children: Element) -> Element {
    const START: f32 = 135.0;
    const SWEEP: f32 = 270.0;

    let frac = share.clamp(0.0, 1.0) as f32;
    let c = size as f32 / 2.0;
    let r = c - stroke as f32 / 2.0 - 1.0;

    let track_d = arc_path(c, c, r, START, START + SWEEP);
    // a zero-length arc renders as a dot with round caps; skip it
    let progress_d = (frac > 0.0).then(|| arc_path(c, c, r, START, START + SWEEP * frac));

    let view_box = format!("0 0 {size} {size}");
    let container_style = format!("width:{size}px;height:{size}px");
    let progress_class = tone.text_class();

    rsx! {
        div { class: "relative", style: "{container_style}",
            svg { width: "{size}", height: "{size}", view_box: "{view_box}",
                path { class: "text-hover", d: "{track_d}", fill: "none", stroke: "currentColor", stroke_width: "{stroke}", stroke_linecap: "round" }
                if let Some(d) = progress_d {
                    path { class: "{progress_class}", d: "{d}", fill: "none", stroke: "currentColor", stroke_width: "{stroke}", stroke_linecap: "round" }
                }
            }
            div { class: "absolute inset-0 grid place-items-center", {children} }
        }
    }
}
