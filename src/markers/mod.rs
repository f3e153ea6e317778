//! Synthetic bin markers for the map panel.

pub mod category;
pub mod color;
pub mod error;
pub mod generator;
pub mod projection;
pub mod status;
pub mod summary;

pub use category::{Category, CategoryTable};
pub use color::Rgb;
pub use error::MarkerError;
pub use generator::{
    GeoPoint, LatLng, MarkerGenerator, DEFAULT_CENTER, DEFAULT_COUNT, DEFAULT_RADIUS,
};
pub use projection::Viewport;
pub use status::MarkerStatus;
pub use summary::StatusSummary;
