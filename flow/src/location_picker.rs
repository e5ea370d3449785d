use crate::reservation_form::ReservationForm;
use kernel::model::geo::GeoPoint;
use kernel::model::map::{InteractionFlags, MapOptions, MapSelection};
use kernel::repository::geolocation::Geolocator;
use kernel::repository::map::MapSurface;
use shared::config::MapConfig;
use shared::error::AppResult;
use std::sync::Arc;

/// Map-based destination selection: one picker, one marker, one
/// coordinate pair fed into the reservation form.
pub struct LocationPicker {
    map: Arc<dyn MapSurface>,
    geolocator: Arc<dyn Geolocator>,
    selection: MapSelection,
}

impl LocationPicker {
    /// Santiago de Chile, the start center when geolocation is
    /// unavailable or denied.
    pub const FALLBACK_CENTER: GeoPoint = GeoPoint::new(-70.6483, -33.4569);
    pub const DEFAULT_ZOOM: f64 = 12.0;

    pub fn new(map: Arc<dyn MapSurface>, geolocator: Arc<dyn Geolocator>) -> Self {
        Self {
            map,
            geolocator,
            selection: MapSelection::centered(Self::FALLBACK_CENTER, Self::DEFAULT_ZOOM),
        }
    }

    /// Mounts the map. Center policy: the geolocated position when the
    /// lookup succeeds, `FALLBACK_CENTER` otherwise. A failed lookup is
    /// logged and never blocks the picker from becoming usable.
    pub async fn open(&mut self, container: &str, map_config: &MapConfig) -> AppResult<()> {
        let center = match self.geolocator.current_position().await {
            Ok(position) => position,
            Err(e) => {
                tracing::warn!(error = %e, "geolocation unavailable, using fallback center");
                Self::FALLBACK_CENTER
            }
        };
        self.selection = MapSelection::centered(center, map_config.default_zoom);
        self.map.mount(MapOptions::new(
            container.to_string(),
            map_config.style.clone(),
            map_config.access_token.clone(),
            center,
            map_config.default_zoom,
            InteractionFlags::default(),
        ))
    }

    /// Translates one click into the current selection: the single marker
    /// is repositioned in place (never duplicated) and the form's
    /// destination is overwritten.
    pub fn click(&mut self, at: GeoPoint, form: &mut ReservationForm) {
        self.map.place_marker(at);
        self.selection.marker = Some(at);
        form.set_destination(at);
    }

    pub fn selection(&self) -> &MapSelection {
        &self.selection
    }
}
