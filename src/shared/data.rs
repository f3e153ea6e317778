//! Static dashboard content. Only the map markers are generated at runtime.

use super::types::{
    ActivityItem, KpiMetric, MapStat, NavItem, NavSection, QuickStat, Tone, Trend,
};
use crate::markers::{LatLng, MarkerStatus};

pub const LAST_UPDATED: &str = "2 min ago";
pub const ZONE_NAME: &str = "Port Harcourt Metropolitan";

pub static KPI_DATA: [KpiMetric; 4] = [
    KpiMetric {
        title: "Total Bins",
        value: "1,247",
        unit: None,
        icon: "🗑",
        tone: Tone::Accent,
        trend: Trend::Up,
        trend_value: 12,
        description: "Active bins in system",
    },
    KpiMetric {
        title: "Active Zones",
        value: "42",
        unit: None,
        icon: "🗺",
        tone: Tone::Success,
        trend: Trend::Up,
        trend_value: 8,
        description: "Zones currently monitored",
    },
    KpiMetric {
        title: "Total Users",
        value: "156",
        unit: None,
        icon: "👥",
        tone: Tone::Info,
        trend: Trend::Down,
        trend_value: 5,
        description: "Registered users",
    },
    KpiMetric {
        title: "System Health",
        value: "98.5",
        unit: Some("%"),
        icon: "❤",
        tone: Tone::Success,
        trend: Trend::Up,
        trend_value: 2,
        description: "Overall system uptime",
    },
];

pub static SECONDARY_STATS: [KpiMetric; 3] = [
    KpiMetric {
        title: "Critical Alerts",
        value: "3",
        unit: None,
        icon: "⚠",
        tone: Tone::Error,
        trend: Trend::Up,
        trend_value: 1,
        description: "Bins requiring maintenance",
    },
    KpiMetric {
        title: "Battery Status",
        value: "87",
        unit: Some("%"),
        icon: "🔋",
        tone: Tone::Warning,
        trend: Trend::Down,
        trend_value: 4,
        description: "Average bin battery level",
    },
    KpiMetric {
        title: "Data Processed",
        value: "2.4",
        unit: Some("TB"),
        icon: "⚡",
        tone: Tone::Accent,
        trend: Trend::Up,
        trend_value: 15,
        description: "Today's data usage",
    },
];

pub static MAP_STATS: [MapStat; 4] = [
    MapStat {
        id: 1,
        status: MarkerStatus::Critical,
        icon: "⚠",
        anchor: LatLng::new(4.8156, 7.0498),
    },
    MapStat {
        id: 2,
        status: MarkerStatus::NotResponding,
        icon: "📵",
        anchor: LatLng::new(4.7719, 6.9974),
    },
    MapStat {
        id: 3,
        status: MarkerStatus::Active,
        icon: "📈",
        anchor: LatLng::new(4.8396, 7.0143),
    },
    MapStat {
        id: 4,
        status: MarkerStatus::Available,
        icon: "▤",
        anchor: LatLng::new(4.7883, 7.073),
    },
];

pub static RECENT_ACTIVITY: [ActivityItem; 5] = [
    ActivityItem {
        tone: Tone::Error,
        message: "Container 45 - Full capacity",
        time: "2 min",
    },
    ActivityItem {
        tone: Tone::Warning,
        message: "Container 89 - No response",
        time: "5 min",
    },
    ActivityItem {
        tone: Tone::Success,
        message: "Container 12 - Emptied",
        time: "12 min",
    },
    ActivityItem {
        tone: Tone::Info,
        message: "Container 67 - Active",
        time: "18 min",
    },
    ActivityItem {
        tone: Tone::Success,
        message: "Container 134 - Available",
        time: "25 min",
    },
];

pub static QUICK_STATS: [QuickStat; 3] = [
    QuickStat {
        label: "Avg Response Time",
        value: "124ms",
        percent: 85.0,
        tone: Tone::Accent,
    },
    QuickStat {
        label: "System Uptime",
        value: "99.9%",
        percent: 99.9,
        tone: Tone::Success,
    },
    QuickStat {
        label: "Collection Rate",
        value: "92%",
        percent: 92.0,
        tone: Tone::Accent,
    },
];

/// Quick stats beside the system metrics row.
pub static SYSTEM_QUICK_STATS: [QuickStat; 3] = [
    QuickStat {
        label: "Avg Response Time",
        value: "124ms",
        percent: 85.0,
        tone: Tone::Accent,
    },
    QuickStat {
        label: "API Uptime",
        value: "99.9%",
        percent: 99.9,
        tone: Tone::Success,
    },
    QuickStat {
        label: "Cache Hit Rate",
        value: "92%",
        percent: 92.0,
        tone: Tone::Accent,
    },
];

pub const BIN_UPDATE_COUNT: u32 = 4;

/// Feed lines for the dashboard activity list: bins #1001.. updated every 5 minutes.
pub fn bin_updates() -> impl Iterator<Item = (String, String)> {
    (1..=BIN_UPDATE_COUNT).map(|n| {
        (
            format!("Bin #{} status updated", 1000 + n),
            format!("{} minutes ago", n * 5),
        )
    })
}

pub static NAV_SECTIONS: [NavSection; 4] = [
    NavSection {
        title: "SYSTEM OVERVIEW",
        icon: "▦",
        items: &[
            NavItem {
                label: "Dashboard",
                icon: "▦",
            },
            NavItem {
                label: "System Analytics",
                icon: "📊",
            },
        ],
    },
    NavSection {
        title: "ZONE MANAGEMENT",
        icon: "🗺",
        items: &[
            NavItem {
                label: "All Zones",
                icon: "🌐",
            },
            NavItem {
                label: "Create New Zone",
                icon: "🗺",
            },
        ],
    },
    NavSection {
        title: "BIN MANAGEMENT",
        icon: "🗑",
        items: &[
            NavItem {
                label: "All Bins",
                icon: "🗑",
            },
            NavItem {
                label: "Assign Bins",
                icon: "✎",
            },
            NavItem {
                label: "Firmware Updates",
                icon: "📡",
            },
        ],
    },
    NavSection {
        title: "USER MANAGEMENT",
        icon: "👤",
        items: &[
            NavItem {
                label: "All Users",
                icon: "👤",
            },
            NavItem {
                label: "Create Directors",
                icon: "➕",
            },
            NavItem {
                label: "Create Staff",
                icon: "➕",
            },
            NavItem {
                label: "Permission",
                icon: "🛡",
            },
            NavItem {
                label: "Activity Logs",
                icon: "📜",
            },
        ],
    },
];

pub const DEFAULT_NAV_ITEM: &str = "Dashboard";

pub fn map_stat(status: MarkerStatus) -> Option<&'static MapStat> {
    MAP_STATS.iter().find(|s| s.status == status)
}
