use dioxus::logger::tracing::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

use super::{CategoryTable, MarkerStatus, Rgb};

/// Port Harcourt city centre.
pub const DEFAULT_CENTER: LatLng = LatLng {
    lat: 4.8156,
    lng: 7.0498,
};
/// Roughly 8 km at this latitude.
pub const DEFAULT_RADIUS: f64 = 0.08;
pub const DEFAULT_COUNT: usize = 196;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// A synthetic bin marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub id: usize,
    pub lat: f64,
    pub lng: f64,
    pub status: MarkerStatus,
    pub color: Rgb,
    pub name: String,
}

impl GeoPoint {
    pub fn position(&self) -> LatLng {
        LatLng::new(self.lat, self.lng)
    }
}

/// Scatters `count` markers uniformly by area over a disk around `center`
/// and tags each with a status drawn from `categories`.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerGenerator {
    pub center: LatLng,
    pub radius: f64,
    pub count: usize,
    pub categories: CategoryTable,
}

impl Default for MarkerGenerator {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            radius: DEFAULT_RADIUS,
            count: DEFAULT_COUNT,
            categories: CategoryTable::reference(),
        }
    }
}

impl MarkerGenerator {
    pub fn new(center: LatLng, radius: f64, count: usize, categories: CategoryTable) -> Self {
        Self {
            center,
            radius,
            count,
            categories,
        }
    }

    /// Draw order per marker is angle, radial fraction, status. Keep it that
    /// way so seeded snapshots stay stable.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<GeoPoint> {
        // zero, negative and NaN radii all pin markers to the center
        let radius = if self.radius > 0.0 { self.radius } else { 0.0 };
        let points: Vec<GeoPoint> = (0..self.count)
            .map(|id| {
                let angle = rng.gen_range(0.0..TAU);
                // sqrt keeps the density uniform per unit area
                let distance = rng.gen::<f64>().sqrt() * radius;
                let lat = self.center.lat + distance * angle.cos();
                let lng = self.center.lng + distance * angle.sin();

                let category = self.categories.select(rng.gen::<f64>());

                GeoPoint {
                    id,
                    lat,
                    lng,
                    status: category.status,
                    color: category.color,
                    name: format!("Container {}", id + 1),
                }
            })
            .collect();

        debug!(
            "[markers] generated {} markers around ({:.4}, {:.4}) r={}",
            points.len(),
            self.center.lat,
            self.center.lng,
            self.radius
        );
        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markers::Category;
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::{HashMap, HashSet};

    const EPS: f64 = 1e-12;

    /// Euclidean distance in degree space, matching how markers are placed.
    fn planar_distance(a: LatLng, b: LatLng) -> f64 {
        (a.lat - b.lat).hypot(a.lng - b.lng)
    }

    fn reference_points(count: usize, seed: u64) -> Vec<GeoPoint> {
        let generator = MarkerGenerator {
            count,
            ..MarkerGenerator::default()
        };
        generator.generate(&mut StdRng::seed_from_u64(seed))
    }

    /// Chi-square statistic of squared radial fractions over `bins`
    /// equal-area annuli. Uniform-by-area samples give a uniform histogram.
    fn annulus_chi_square(points: &[LatLng], center: LatLng, radius: f64, bins: usize) -> f64 {
        let mut observed = vec![0usize; bins];
        for p in points {
            let frac = (planar_distance(*p, center) / radius).powi(2);
            let bin = ((frac * bins as f64) as usize).min(bins - 1);
            observed[bin] += 1;
        }
        let expected = points.len() as f64 / bins as f64;
        observed
            .iter()
            .map(|&o| (o as f64 - expected).powi(2) / expected)
            .sum()
    }

    // chi-square, 9 degrees of freedom, p = 1e-5
    const CHI2_9DF_CRITICAL: f64 = 40.0;

    #[test]
    fn zero_count_yields_empty_snapshot() {
        assert!(reference_points(0, 1).is_empty());
    }

    #[test]
    fn produces_exact_count_with_sequential_ids() {
        for count in [1, 2, 17, 196, 1000] {
            let points = reference_points(count, count as u64);
            assert_eq!(points.len(), count);
            for (i, p) in points.iter().enumerate() {
                assert_eq!(p.id, i);
                assert_eq!(p.name, format!("Container {}", i + 1));
            }
            let ids: HashSet<usize> = points.iter().map(|p| p.id).collect();
            assert_eq!(ids.len(), count);
        }
    }

    #[test]
    fn every_point_lies_within_radius() {
        let generator = MarkerGenerator::default();
        let points = reference_points(20_000, 3);
        for p in &points {
            let d = planar_distance(p.position(), generator.center);
            assert!(d <= generator.radius + EPS, "{} is {d} from center", p.name);
        }
    }

    #[test]
    fn non_positive_radius_collapses_to_center() {
        for radius in [0.0, -0.08, f64::NAN] {
            let generator = MarkerGenerator {
                radius,
                count: 50,
                ..MarkerGenerator::default()
            };
            let points = generator.generate(&mut StdRng::seed_from_u64(9));
            assert_eq!(points.len(), 50);
            for p in points {
                assert_eq!(p.position(), generator.center);
            }
        }
    }

    #[test]
    fn density_is_uniform_per_unit_area() {
        let generator = MarkerGenerator::default();
        let points: Vec<LatLng> = reference_points(100_000, 11)
            .iter()
            .map(GeoPoint::position)
            .collect();
        let chi2 = annulus_chi_square(&points, generator.center, generator.radius, 10);
        assert!(chi2 < CHI2_9DF_CRITICAL, "chi-square {chi2}");
    }

    #[test]
    fn linear_radial_draw_fails_the_same_density_check() {
        let generator = MarkerGenerator::default();
        let mut rng = StdRng::seed_from_u64(11);
        let points: Vec<LatLng> = (0..100_000)
            .map(|_| {
                let angle = rng.gen_range(0.0..TAU);
                let distance = rng.gen::<f64>() * generator.radius;
                LatLng::new(
                    generator.center.lat + distance * angle.cos(),
                    generator.center.lng + distance * angle.sin(),
                )
            })
            .collect();
        let chi2 = annulus_chi_square(&points, generator.center, generator.radius, 10);
        assert!(chi2 > CHI2_9DF_CRITICAL * 100.0, "chi-square {chi2}");
    }

    #[test]
    fn angles_cover_the_full_circle() {
        let generator = MarkerGenerator::default();
        let mut quadrants = [0usize; 4];
        for p in reference_points(40_000, 5) {
            let north = p.lat >= generator.center.lat;
            let east = p.lng >= generator.center.lng;
            quadrants[(north as usize) << 1 | east as usize] += 1;
        }
        for q in quadrants {
            assert!((9_000..11_000).contains(&q), "quadrant count {q}");
        }
    }

    #[test]
    fn status_frequencies_converge_to_configured_shares() {
        let count = 100_000;
        let table = CategoryTable::reference();
        let mut tally: HashMap<MarkerStatus, usize> = HashMap::new();
        for p in reference_points(count, 42) {
            *tally.entry(p.status).or_default() += 1;
        }
        for status in MarkerStatus::ALL {
            let observed = tally.get(&status).copied().unwrap_or(0) as f64 / count as f64;
            let expected = table.share(status);
            assert!(
                (observed - expected).abs() < 0.01,
                "{status}: observed {observed}, expected {expected}"
            );
        }
    }

    #[test]
    fn color_is_a_function_of_status() {
        let table = CategoryTable::reference();
        let mut colors: HashMap<MarkerStatus, HashSet<Rgb>> = HashMap::new();
        for p in reference_points(5_000, 8) {
            colors.entry(p.status).or_default().insert(p.color);
        }
        for (status, set) in colors {
            assert_eq!(set.len(), 1, "{status} has colors {set:?}");
            assert_eq!(set.into_iter().next(), table.color_of(status));
        }
    }

    #[test]
    fn same_seed_gives_same_snapshot() {
        assert_eq!(reference_points(196, 77), reference_points(196, 77));
        assert_ne!(reference_points(196, 77), reference_points(196, 78));
    }

    #[test]
    fn port_harcourt_reference_scenario() {
        let points = reference_points(DEFAULT_COUNT, 2024);
        assert_eq!(points.len(), 196);
        assert_eq!(points.first().map(|p| p.id), Some(0));
        assert_eq!(points.last().map(|p| p.id), Some(195));
        for p in &points {
            assert!(planar_distance(p.position(), DEFAULT_CENTER) <= DEFAULT_RADIUS + EPS);
        }
        // a single sample of 196 only roughly follows 12 / 5 / 23 / 156
        let available = points
            .iter()
            .filter(|p| p.status == MarkerStatus::Available)
            .count();
        assert!((120..=185).contains(&available), "available {available}");
    }

    #[test]
    fn custom_table_is_honoured() {
        let only_critical = vec![Category::new(MarkerStatus::Critical, 1.0, Rgb::RED)];
        let table = CategoryTable::new(only_critical).unwrap();
        let generator = MarkerGenerator::new(LatLng::new(0.0, 0.0), 1.0, 100, table);
        let points = generator.generate(&mut StdRng::seed_from_u64(1));
        assert!(points
            .iter()
            .all(|p| p.status == MarkerStatus::Critical && p.color == Rgb::RED));
    }

    #[test]
    fn serializes_with_short_coordinate_names() {
        let p = &reference_points(1, 4)[0];
        let v = serde_json::to_value(p).unwrap();
        assert_eq!(v["id"], 0);
        assert_eq!(v["name"], "Container 1");
        assert!(v["lat"].is_f64());
        assert!(v["lng"].is_f64());
        assert_eq!(v["color"], p.color.to_hex());
        assert_eq!(v["status"], p.status.as_str());
    }
}
