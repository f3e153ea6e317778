use rand::{rngs::StdRng, SeedableRng};
use std::str::FromStr;
use thiserror::Error;

use crate::markers::{
    Category, CategoryTable, LatLng, MarkerError, MarkerGenerator, MarkerStatus, Rgb,
    DEFAULT_CENTER, DEFAULT_COUNT, DEFAULT_RADIUS,
};

pub const ENV_CENTER_LAT: &str = "BINWATCH_CENTER_LAT";
pub const ENV_CENTER_LNG: &str = "BINWATCH_CENTER_LNG";
pub const ENV_RADIUS: &str = "BINWATCH_RADIUS";
pub const ENV_MARKER_COUNT: &str = "BINWATCH_MARKER_COUNT";
pub const ENV_SEED: &str = "BINWATCH_SEED";
/// Comma separated `status:upper_bound:#rrggbb` entries, in cumulative order.
pub const ENV_CATEGORIES: &str = "BINWATCH_CATEGORIES";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {var}")]
    Invalid { var: &'static str, value: String },

    #[error("invalid BINWATCH_CATEGORIES: {0}")]
    Categories(#[from] MarkerError),
}

/// Marker generator settings. Unset variables keep the Port Harcourt defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct MapConfig {
    pub center: LatLng,
    pub radius: f64,
    pub count: usize,
    pub seed: Option<u64>,
    pub categories: CategoryTable,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            radius: DEFAULT_RADIUS,
            count: DEFAULT_COUNT,
            seed: None,
            categories: CategoryTable::reference(),
        }
    }
}

impl MapConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let lat = parse_var(&lookup, ENV_CENTER_LAT)?.unwrap_or(defaults.center.lat);
        let lng = parse_var(&lookup, ENV_CENTER_LNG)?.unwrap_or(defaults.center.lng);
        let radius: f64 = parse_var(&lookup, ENV_RADIUS)?.unwrap_or(defaults.radius);
        if !lat.is_finite() || !lng.is_finite() || !radius.is_finite() {
            let (var, value) = if !lat.is_finite() {
                (ENV_CENTER_LAT, lat)
            } else if !lng.is_finite() {
                (ENV_CENTER_LNG, lng)
            } else {
                (ENV_RADIUS, radius)
            };
            return Err(ConfigError::Invalid {
                var,
                value: value.to_string(),
            });
        }

        Ok(Self {
            center: LatLng::new(lat, lng),
            radius,
            count: parse_var(&lookup, ENV_MARKER_COUNT)?.unwrap_or(defaults.count),
            seed: parse_var(&lookup, ENV_SEED)?,
            categories: match lookup(ENV_CATEGORIES) {
                Some(raw) if !raw.trim().is_empty() => parse_categories(&raw)?,
                _ => defaults.categories,
            },
        })
    }

    /// Optional count override, e.g. from a CLI argument.
    #[cfg(any(test, feature = "cli"))]
    pub fn with_count(mut self, count: Option<usize>) -> Self {
        if let Some(count) = count {
            self.count = count;
        }
        self
    }

    pub fn generator(&self) -> MarkerGenerator {
        MarkerGenerator::new(
            self.center,
            self.radius,
            self.count,
            self.categories.clone(),
        )
    }

    /// Seeded when `BINWATCH_SEED` is set, otherwise from OS entropy.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Parses `critical:0.06:#ef4444,available:1.0:#10b981` into a validated table.
pub fn parse_categories(raw: &str) -> Result<CategoryTable, ConfigError> {
    let invalid = || ConfigError::Invalid {
        var: ENV_CATEGORIES,
        value: raw.to_string(),
    };
    let mut categories = Vec::new();
    for entry in raw.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        let mut parts = entry.split(':').map(str::trim);
        let (Some(status), Some(bound), Some(color), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };
        let status: MarkerStatus = status.parse()?;
        let upper_bound: f64 = bound.parse().map_err(|_| invalid())?;
        let color: Rgb = color.parse()?;
        categories.push(Category::new(status, upper_bound, color));
    }
    Ok(CategoryTable::new(categories)?)
}

fn parse_var<F, T>(lookup: &F, var: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(var) {
        None => Ok(None),
        Some(raw) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed
                .parse()
                .map(Some)
                .map_err(|_| ConfigError::Invalid { var, value: raw })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let cfg = MapConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg, MapConfig::default());
        assert_eq!(cfg.generator(), MarkerGenerator::default());
    }

    #[test]
    fn reads_every_variable() {
        let cfg = MapConfig::from_lookup(lookup(&[
            (ENV_CENTER_LAT, "51.5074"),
            (ENV_CENTER_LNG, " -0.1278 "),
            (ENV_RADIUS, "0.5"),
            (ENV_MARKER_COUNT, "12"),
            (ENV_SEED, "42"),
        ]))
        .unwrap();
        assert_eq!(cfg.center, LatLng::new(51.5074, -0.1278));
        assert_eq!(cfg.radius, 0.5);
        assert_eq!(cfg.count, 12);
        assert_eq!(cfg.seed, Some(42));
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let cfg = MapConfig::from_lookup(lookup(&[(ENV_RADIUS, "  ")])).unwrap();
        assert_eq!(cfg.radius, DEFAULT_RADIUS);
    }

    #[test]
    fn unparsable_value_names_the_variable() {
        let err = MapConfig::from_lookup(lookup(&[(ENV_MARKER_COUNT, "lots")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                var: ENV_MARKER_COUNT,
                value: "lots".into()
            }
        );
        assert!(err.to_string().contains(ENV_MARKER_COUNT));
    }

    #[test]
    fn rejects_non_finite_coordinates() {
        let err = MapConfig::from_lookup(lookup(&[(ENV_CENTER_LNG, "inf")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: ENV_CENTER_LNG, .. }));
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let cfg = MapConfig {
            seed: Some(5),
            ..MapConfig::default()
        }
        .with_count(Some(30));
        let a = cfg.generator().generate(&mut cfg.rng());
        let b = cfg.generator().generate(&mut cfg.rng());
        assert_eq!(a.len(), 30);
        assert_eq!(a, b);
    }

    #[test]
    fn categories_from_env_drive_the_generator() {
        let cfg = MapConfig::from_lookup(lookup(&[
            (ENV_CATEGORIES, "critical:0.5:#ff0000, available:1.0:#00ff00"),
            (ENV_SEED, "3"),
        ]))
        .unwrap();
        assert!((cfg.categories.share(MarkerStatus::Critical) - 0.5).abs() < 1e-12);
        assert_eq!(cfg.categories.color_of(MarkerStatus::Active), None);

        let points = cfg.generator().generate(&mut cfg.rng());
        assert!(points.iter().all(|p| matches!(
            p.status,
            MarkerStatus::Critical | MarkerStatus::Available
        )));
        let red = Rgb::new(0xff, 0, 0);
        assert!(points
            .iter()
            .all(|p| (p.status == MarkerStatus::Critical) == (p.color == red)));
    }

    #[test]
    fn reference_categories_round_trip_through_the_env_format() {
        let raw = "critical:0.06:#ef4444,not_responding:0.09:#f59e0b,\
                   active:0.21:#3b82f6,available:1.0:#10b981";
        assert_eq!(parse_categories(raw).unwrap(), CategoryTable::reference());
    }

    #[test]
    fn malformed_category_entries_are_rejected() {
        for raw in ["critical:0.5", "critical:half:#ff0000,available:1:#00ff00", "a:b:c:d"] {
            assert!(
                matches!(
                    parse_categories(raw),
                    Err(ConfigError::Invalid { var: ENV_CATEGORIES, .. })
                ),
                "accepted {raw}"
            );
        }
    }

    #[test]
    fn table_checks_surface_through_config() {
        let err = MapConfig::from_lookup(lookup(&[(
            ENV_CATEGORIES,
            "critical:0.3:#ff0000,available:0.9:#00ff00",
        )]))
        .unwrap_err();
        assert_eq!(err, ConfigError::Categories(MarkerError::FinalBound(0.9)));

        let err = parse_categories("broken:1.0:#ff0000").unwrap_err();
        assert_eq!(
            err,
            ConfigError::Categories(MarkerError::UnknownStatus("broken".into()))
        );

        let err = parse_categories("available:1.0:#+f+f+f").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Categories(MarkerError::InvalidColor(_))
        ));

        let err = parse_categories(" , ").unwrap_err();
        assert_eq!(err, ConfigError::Categories(MarkerError::EmptyTable));
    }

    #[test]
    fn count_override_is_optional() {
        let cfg = MapConfig::default().with_count(None);
        assert_eq!(cfg.count, DEFAULT_COUNT);
    }
}
