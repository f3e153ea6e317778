use super::LatLng;

/// Share of the canvas half-width the disk radius maps to.
const FILL: f64 = 0.92;

/// Planar mapping from lat/lng around `center` into a square SVG canvas of
/// `size` pixels, north up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub center: LatLng,
    pub radius: f64,
    pub size: f64,
}

impl Viewport {
    pub fn new(center: LatLng, radius: f64, size: f64) -> Self {
        Self {
            center,
            radius,
            size,
        }
    }

    /// Same canvas, re-centred on `anchor` and zoomed in by `zoom`.
    pub fn focused(&self, anchor: LatLng, zoom: f64) -> Self {
        Self {
            center: anchor,
            radius: self.radius / zoom.max(1.0),
            size: self.size,
        }
    }

    pub fn project(&self, p: LatLng) -> (f64, f64) {
        let half = self.size / 2.0;
        if self.radius <= 0.0 {
            return (half, half);
        }
        let scale = half * FILL / self.radius;
        let x = half + (p.lng - self.center.lng) * scale;
        let y = half - (p.lat - self.center.lat) * scale;
        (x, y)
    }

    pub fn contains(&self, (x, y): (f64, f64)) -> bool {
        (0.0..=self.size).contains(&x) && (0.0..=self.size).contains(&y)
    }
}
