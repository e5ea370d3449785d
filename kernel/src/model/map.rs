use crate::model::geo::GeoPoint;
use derive_new::new;

/// Ephemeral state of one map-based location picker. There is never more
/// than one marker; a new click replaces the previous selection.
#[derive(Debug, Clone, PartialEq)]
pub struct MapSelection {
    pub marker: Option<GeoPoint>,
    pub center: GeoPoint,
    pub zoom: f64,
}

impl MapSelection {
    pub fn centered(center: GeoPoint, zoom: f64) -> Self {
        Self {
            marker: None,
            center,
            zoom,
        }
    }
}

#[derive(Debug, Clone, PartialEq, new)]
pub struct MapOptions {
    pub container: String,
    pub style: String,
    pub access_token: Option<String>,
    pub center: GeoPoint,
    pub zoom: f64,
    pub interaction: InteractionFlags,
}

/// Interaction affordances for the map surface. These are configuration
/// constants, not behavior the engine models.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractionFlags {
    pub drag_pan: bool,
    pub scroll_zoom: bool,
    pub double_click_zoom: bool,
    pub drag_rotate: bool,
    pub touch_pitch: bool,
}

impl Default for InteractionFlags {
    fn default() -> Self {
        Self {
            drag_pan: true,
            scroll_zoom: true,
            double_click_zoom: true,
            drag_rotate: false,
            touch_pitch: false,
        }
    }
}
