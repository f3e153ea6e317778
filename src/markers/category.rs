use serde::Serialize;

use super::{MarkerError, MarkerStatus, Rgb};

const FINAL_BOUND_TOLERANCE: f64 = 1e-9;

/// One row of a cumulative status table: a draw `r` lands here when it is
/// below `upper_bound` and not below any earlier bound.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Category {
    pub status: MarkerStatus,
    pub upper_bound: f64,
    pub color: Rgb,
}

impl Category {
    pub const fn new(status: MarkerStatus, upper_bound: f64, color: Rgb) -> Self {
        Self {
            status,
            upper_bound,
            color,
        }
    }
}

/// Validated, ordered cumulative distribution over marker statuses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTable {
    categories: Vec<Category>,
}

impl CategoryTable {
    pub fn new(categories: Vec<Category>) -> Result<Self, MarkerError> {
        let Some(last) = categories.last() else {
            return Err(MarkerError::EmptyTable);
        };
        if (last.upper_bound - 1.0).abs() > FINAL_BOUND_TOLERANCE {
            return Err(MarkerError::FinalBound(last.upper_bound));
        }

        let mut previous = 0.0f64;
        let mut seen: Vec<MarkerStatus> = Vec::with_capacity(categories.len());
        for (index, c) in categories.iter().enumerate() {
            let bound = c.upper_bound;
            if !bound.is_finite() || !(0.0..=1.0 + FINAL_BOUND_TOLERANCE).contains(&bound) {
                return Err(MarkerError::BoundOutOfRange { index, bound });
            }
            if bound < previous {
                return Err(MarkerError::DecreasingBound {
                    index,
                    bound,
                    previous,
                });
            }
            if seen.contains(&c.status) {
                return Err(MarkerError::DuplicateStatus(c.status));
            }
            seen.push(c.status);
            previous = bound;
        }

        Ok(Self { categories })
    }

    /// critical 6%, not responding 3%, active 12%, available 79%.
    pub fn reference() -> Self {
        Self {
            categories: vec![
                Category::new(MarkerStatus::Critical, 0.06, Rgb::RED),
                Category::new(MarkerStatus::NotResponding, 0.09, Rgb::AMBER),
                Category::new(MarkerStatus::Active, 0.21, Rgb::BLUE),
                Category::new(MarkerStatus::Available, 1.0, Rgb::GREEN),
            ],
        }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// First category whose bound is strictly above `r`. Draws past every
    /// bound (only reachable through rounding) land on the last category.
    pub fn select(&self, r: f64) -> &Category {
        self.categories
            .iter()
            .find(|c| r < c.upper_bound)
            .unwrap_or_else(|| self.last())
    }

    pub fn share(&self, status: MarkerStatus) -> f64 {
        let mut lower = 0.0;
        for c in &self.categories {
            if c.status == status {
                return c.upper_bound - lower;
            }
            lower = c.upper_bound;
        }
        0.0
    }

    pub fn color_of(&self, status: MarkerStatus) -> Option<Rgb> {
        self.categories
            .iter()
            .find(|c| c.status == status)
            .map(|c| c.color)
    }

    fn last(&self) -> &Category {
        // non-empty is checked in `new`
        &self.categories[self.categories.len() - 1]
    }
}

impl Default for CategoryTable {
    fn default() -> Self {
        Self::reference()
    }
}
