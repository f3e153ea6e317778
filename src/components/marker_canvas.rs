use dioxus::prelude::*;
use std::rc::Rc;

use crate::markers::{GeoPoint, LatLng, MarkerStatus, Viewport};

const FOCUS_ZOOM: f64 = 1.6;

struct DrawnMarker {
    index: usize,
    id: usize,
    x: f64,
    y: f64,
    r: u8,
    opacity: f64,
    color: String,
}

/// Markers drawn over a flat disk. No tiles are fetched; the background is
/// the generation zone itself.
#[allow(non_snake_case)]
#[component]
pub fn MarkerCanvas(
    points: Rc<[GeoPoint]>,
    viewport: Viewport,
    focus: Option<(MarkerStatus, LatLng)>,
) -> Element {
    let mut hovered = use_signal(|| Option::<usize>::None);

    let view = match focus {
        Some((_, anchor)) => viewport.focused(anchor, FOCUS_ZOOM),
        None => viewport,
    };
    let size = view.size;
    let half = size / 2.0;
    let zone = viewport.center;
    let (zone_x, zone_y) = view.project(zone);
    let zone_r = half * 0.92 * viewport.radius / view.radius.max(f64::MIN_POSITIVE);
    let view_box = format!("0 0 {size} {size}");

    let markers: Vec<DrawnMarker> = points
        .iter()
        .enumerate()
        .filter_map(|(index, p)| {
            let (x, y) = view.project(p.position());
            if !view.contains((x, y)) {
                return None;
            }
            let emphasised = focus.map(|(s, _)| s == p.status).unwrap_or(false);
            let opacity = match (focus.is_some(), emphasised) {
                (false, _) => 0.7,
                (true, true) => 0.9,
                (true, false) => 0.25,
            };
            Some(DrawnMarker {
                index,
                id: p.id,
                x,
                y,
                r: if emphasised { 8 } else { 5 },
                opacity,
                color: p.color.to_hex(),
            })
        })
        .collect();

    rsx! {
        svg { class: "block h-full w-full", view_box: "{view_box}",
            rect { x: "0", y: "0", width: "{size}", height: "{size}", fill: "#151a29" }
            for ring in [1.0f64, 0.66, 0.33] {
                circle { key: "{ring}", cx: "{zone_x}", cy: "{zone_y}", r: "{zone_r * ring}", fill: "none", stroke: "#374151", stroke_width: "1", stroke_dasharray: "4 6" }
            }
            for m in markers {
                circle { key: "{m.id}", cx: "{m.x}", cy: "{m.y}", r: "{m.r}",
                    fill: "{m.color}", fill_opacity: "{m.opacity}", stroke: "{m.color}", stroke_width: "2",
                    class: "cursor-pointer transition-all duration-300",
                    onmouseenter: move |_| hovered.set(Some(m.index)),
                    onmouseleave: move |_| hovered.set(None),
                    ontouchstart: move |_| hovered.set(Some(m.index)),
                }
            }
            {
                match hovered() {
                    Some(i) if i < points.len() => {
                        let p = &points[i];
                        let (x, y) = view.project(p.position());
                        let title = p.name.clone();
                        let label = p.status.label();
                        let cw = 7.0f64; // approx char width at 11px
                        let tip_w = (title.len().max(label.len()) as f64 * cw + 16.0).min(size - 8.0);
                        let tip_h = 36.0f64;
                        let tip_x = (x - tip_w / 2.0).clamp(4.0, size - 4.0 - tip_w);
                        let tip_y = if y - 14.0 - tip_h >= 4.0 { y - 14.0 - tip_h } else { y + 14.0 };
                        rsx! { g { key: "tooltip", class: "pointer-events-none",
                            rect { x: "{tip_x}", y: "{tip_y}", width: "{tip_w}", height: "{tip_h}", rx: "6", fill: "#2a2a40", stroke: "#374151", stroke_width: "1" }
                            text { x: "{tip_x + tip_w / 2.0}", y: "{tip_y + 15.0}", text_anchor: "middle", class: "fill-current text-[11px] font-bold text-text", "{title}" }
                            text { x: "{tip_x + tip_w / 2.0}", y: "{tip_y + 29.0}", text_anchor: "middle", class: "fill-current text-[11px] text-textTertiary", "{label}" }
                        }}
                    }
                    _ => rsx! { Fragment {} },
                }
            }
        }
    }
}
