//! Map view and selection core of the triage client.
//!
//! A [`MapListBinding`] ties together one [`SelectionStore`], the current
//! [`FacilitySet`](triage_geo::FacilitySet) and a [`MapRenderer`]. The list
//! of hospital cards and the map both go through the same store, so picking a
//! hospital in one view highlights it in the other.
//!
//! Rendering produces a [`MapScene`]: plain data describing the tile layer,
//! markers, popups, the user's position and the route line. A front-end
//! adapter draws it as-is.

pub mod binding;
pub mod config;
pub mod error;
pub mod render;
pub mod rows;
pub mod scene;
pub mod selection;
pub mod viewport;

pub use binding::MapListBinding;
pub use config::MapConfig;
pub use error::{ConfigError, MapError, SelectionError, ViewError};
pub use render::{initial_center, route_overlay, MapRenderer};
pub use rows::FacilityRow;
pub use scene::{MapAction, MapEvent, MapScene, RouteOverlay};
pub use selection::{SelectionEvent, SelectionState, SelectionStore, SubscriptionId};
pub use viewport::Viewport;

/// Result type for map operations.
pub type Result<T> = std::result::Result<T, MapError>;
