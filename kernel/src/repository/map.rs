use crate::model::geo::GeoPoint;
use crate::model::map::MapOptions;
use shared::error::AppResult;

/// The interactive map surface the shell renders.
pub trait MapSurface: Send + Sync {
    fn mount(&self, options: MapOptions) -> AppResult<()>;

    /// Places the marker at `at`. Creates it on the first call and
    /// repositions it in place afterwards; the surface never holds more
    /// than one marker.
    fn place_marker(&self, at: GeoPoint);

    fn clear_marker(&self);
}
