pub mod gauge;
pub mod header;
pub mod kpi_card;
pub mod map_panel;
pub mod marker_canvas;
pub mod navbar;
pub mod sidebar;
pub mod tooltip;

pub use gauge::Gauge;
pub use header::Header;
pub use kpi_card::KpiCard;
pub use map_panel::DeviceTrackingMap;
pub use marker_canvas::MarkerCanvas;
pub use navbar::Navbar;
pub use sidebar::Sidebar;
pub use tooltip::{Tooltip, TooltipSide};
