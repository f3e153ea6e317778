use serde::Serialize;

use super::{GeoPoint, MarkerStatus};

/// Per-status tallies for one snapshot, in `MarkerStatus::ALL` order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusSummary {
    pub critical: usize,
    pub not_responding: usize,
    pub active: usize,
    pub available: usize,
}

impl StatusSummary {
    pub fn from_points(points: &[GeoPoint]) -> Self {
        points.iter().fold(Self::default(), |mut acc, p| {
            *acc.slot(p.status) += 1;
            acc
        })
    }

    pub fn count(&self, status: MarkerStatus) -> usize {
        match status {
            MarkerStatus::Critical => self.critical,
            MarkerStatus::NotResponding => self.not_responding,
            MarkerStatus::Active => self.active,
            MarkerStatus::Available => self.available,
        }
    }

    pub fn total(&self) -> usize {
        self.critical + self.not_responding + self.active + self.available
    }

    /// Share of markers that are neither critical nor silent, in `[0, 1]`.
    pub fn operational_share(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        let operational: usize = MarkerStatus::ALL
            .into_iter()
            .filter(|s| s.is_operational())
            .map(|s| self.count(s))
            .sum();
        operational as f64 / total as f64
    }

    fn slot(&mut self, status: MarkerStatus) -> &mut usize {
        match status {
            MarkerStatus::Critical => &mut self.critical,
            MarkerStatus::NotResponding => &mut self.not_responding,
            MarkerStatus::Active => &mut self.active,
            MarkerStatus::Available => &mut self.available,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markers::{MarkerGenerator, Rgb};
    use rand::{rngs::StdRng, SeedableRng};

    fn point(id: usize, status: MarkerStatus) -> GeoPoint {
        GeoPoint {
            id,
            lat: 0.0,
            lng: 0.0,
            status,
            color: Rgb::GREEN,
            name: format!("Container {}", id + 1),
        }
    }

    #[test]
    fn empty_snapshot() {
        let s = StatusSummary::from_points(&[]);
        assert_eq!(s, StatusSummary::default());
        assert_eq!(s.total(), 0);
        assert_eq!(s.operational_share(), 0.0);
    }

    #[test]
    fn counts_each_status() {
        let points = vec![
            point(0, MarkerStatus::Critical),
            point(1, MarkerStatus::Available),
            point(2, MarkerStatus::Available),
            point(3, MarkerStatus::NotResponding),
            point(4, MarkerStatus::Active),
        ];
        let s = StatusSummary::from_points(&points);
        assert_eq!(s.count(MarkerStatus::Critical), 1);
        assert_eq!(s.count(MarkerStatus::NotResponding), 1);
        assert_eq!(s.count(MarkerStatus::Active), 1);
        assert_eq!(s.count(MarkerStatus::Available), 2);
        assert_eq!(s.total(), 5);
        assert!((s.operational_share() - 0.6).abs() < 1e-12);
    }

    #[test]
    fn operational_share_tracks_status_operational_flag() {
        let points = MarkerGenerator::default().generate(&mut StdRng::seed_from_u64(21));
        let s = StatusSummary::from_points(&points);
        let operational = points.iter().filter(|p| p.status.is_operational()).count();
        let expected = operational as f64 / points.len() as f64;
        assert!((s.operational_share() - expected).abs() < 1e-12);

        let silent_only = vec![
            point(0, MarkerStatus::NotResponding),
            point(1, MarkerStatus::Critical),
        ];
        assert_eq!(StatusSummary::from_points(&silent_only).operational_share(), 0.0);
    }

    #[test]
    fn total_matches_generated_count() {
        let points = MarkerGenerator::default().generate(&mut StdRng::seed_from_u64(6));
        let s = StatusSummary::from_points(&points);
        assert_eq!(s.total(), points.len());
        let by_status: usize = MarkerStatus::ALL.iter().map(|&st| s.count(st)).sum();
        assert_eq!(by_status, points.len());
    }
}
