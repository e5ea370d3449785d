use kernel::model::geo::GeoPoint;
use kernel::model::map::MapOptions;
use kernel::repository::map::MapSurface;
use shared::error::AppResult;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// `MapSurface` with no rendering: it records the mount options and the
/// single marker. The shell swaps in a real map; tests and the headless
/// binary observe the recorded state.
#[derive(Default)]
pub struct HeadlessMapSurface {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    mounted: Option<MapOptions>,
    marker: Option<GeoPoint>,
    marker_creations: u32,
}

impl HeadlessMapSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mounted(&self) -> Option<MapOptions> {
        self.lock().mounted.clone()
    }

    pub fn marker(&self) -> Option<GeoPoint> {
        self.lock().marker
    }

    /// How many times a marker was created (as opposed to repositioned).
    pub fn marker_creations(&self) -> u32 {
        self.lock().marker_creations
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl MapSurface for HeadlessMapSurface {
    fn mount(&self, options: MapOptions) -> AppResult<()> {
        tracing::debug!(center = %options.center, zoom = options.zoom, "map mounted");
        self.lock().mounted = Some(options);
        Ok(())
    }

    fn place_marker(&self, at: GeoPoint) {
        let mut inner = self.lock();
        if inner.marker.is_none() {
            inner.marker_creations += 1;
        }
        inner.marker = Some(at);
    }

    fn clear_marker(&self) {
        self.lock().marker = None;
    }
}
