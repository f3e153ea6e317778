use crate::markers::{LatLng, MarkerStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

/// Theme color family, matching the Tailwind palette names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Accent,
    Success,
    Warning,
    Error,
    Info,
}

impl Tone {
    pub fn text_class(self) -> &'static str {
        match self {
            Tone::Accent => "text-accent",
            Tone::Success => "text-success",
            Tone::Warning => "text-warning",
            Tone::Error => "text-error",
            Tone::Info => "text-info",
        }
    }

    pub fn bg_class(self) -> &'static str {
        match self {
            Tone::Accent => "bg-accent",
            Tone::Success => "bg-success",
            Tone::Warning => "bg-warning",
            Tone::Error => "bg-error",
            Tone::Info => "bg-info",
        }
    }
}

impl From<MarkerStatus> for Tone {
    fn from(status: MarkerStatus) -> Self {
        match status {
            MarkerStatus::Critical => Tone::Error,
            MarkerStatus::NotResponding => Tone::Warning,
            MarkerStatus::Active => Tone::Info,
            MarkerStatus::Available => Tone::Success,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct KpiMetric {
    pub title: &'static str,
    pub value: &'static str,
    pub unit: Option<&'static str>,
    pub icon: &'static str,
    pub tone: Tone,
    pub trend: Trend,
    pub trend_value: u32, // percent
    pub description: &'static str,
}

/// Stat card beside the map; the count comes from the live snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapStat {
    pub id: u8,
    pub status: MarkerStatus,
    pub icon: &'static str,
    pub anchor: LatLng,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActivityItem {
    pub tone: Tone,
    pub message: &'static str,
    pub time: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuickStat {
    pub label: &'static str,
    pub value: &'static str,
    pub percent: f32,
    pub tone: Tone,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavItem {
    pub label: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavSection {
    pub title: &'static str,
    pub icon: &'static str,
    pub items: &'static [NavItem],
}
