use adapter::headless_map::HeadlessMapSurface;
use adapter::memory::MemoryDocumentStore;
use adapter::presenter::TracePresenter;
use async_trait::async_trait;
use flow::{LocationPicker, ReservationForm};
use kernel::model::geo::GeoPoint;
use kernel::model::user::Identity;
use kernel::repository::geolocation::Geolocator;
use kernel::repository::identity::IdentityProvider;
use shared::config::MapConfig;
use shared::error::{AppError, AppResult};
use std::sync::Arc;

struct FixedGeolocator(GeoPoint);

#[async_trait]
impl Geolocator for FixedGeolocator {
    async fn current_position(&self) -> AppResult<GeoPoint> {
        Ok(self.0)
    }
}

struct DeniedGeolocator;

#[async_trait]
impl Geolocator for DeniedGeolocator {
    async fn current_position(&self) -> AppResult<GeoPoint> {
        Err(AppError::GeolocationError("permission denied".to_string()))
    }
}

struct TestIdentity;

impl IdentityProvider for TestIdentity {
    fn current(&self) -> Option<Identity> {
        Some(Identity::new("u1".into(), "Ana".to_string()))
    }

    fn sign_out(&self) {}
}

fn map_config() -> MapConfig {
    MapConfig {
        style: "mapbox://styles/mapbox/streets-v11".to_string(),
        access_token: None,
        default_zoom: 12.0,
    }
}

fn open_form() -> ReservationForm {
    ReservationForm::open(
        &TestIdentity,
        Arc::new(MemoryDocumentStore::new()),
        Arc::new(TracePresenter::new()),
    )
}

#[tokio::test]
async fn mounts_at_the_geolocated_position() {
    let surface = Arc::new(HeadlessMapSurface::new());
    let here = GeoPoint::new(-100.391404, 20.652494);
    let mut picker = LocationPicker::new(surface.clone(), Arc::new(FixedGeolocator(here)));

    picker.open("map", &map_config()).await.unwrap();

    let options = surface.mounted().expect("map mounted");
    assert_eq!(options.center, here);
    assert_eq!(options.zoom, 12.0);
    assert_eq!(picker.selection().center, here);
}

#[tokio::test]
async fn geolocation_failure_falls_back_and_still_mounts() {
    let surface = Arc::new(HeadlessMapSurface::new());
    let mut picker = LocationPicker::new(surface.clone(), Arc::new(DeniedGeolocator));

    picker.open("map", &map_config()).await.unwrap();

    let options = surface.mounted().expect("map mounted despite denial");
    assert_eq!(options.center, LocationPicker::FALLBACK_CENTER);
}

#[tokio::test]
async fn mount_disables_rotation_and_pitch() {
    let surface = Arc::new(HeadlessMapSurface::new());
    let mut picker = LocationPicker::new(surface.clone(), Arc::new(DeniedGeolocator));

    picker.open("map", &map_config()).await.unwrap();

    let flags = surface.mounted().unwrap().interaction;
    assert!(flags.drag_pan && flags.scroll_zoom && flags.double_click_zoom);
    assert!(!flags.drag_rotate && !flags.touch_pitch);
}

#[tokio::test]
async fn second_click_replaces_the_selection() {
    let surface = Arc::new(HeadlessMapSurface::new());
    let mut picker = LocationPicker::new(surface.clone(), Arc::new(DeniedGeolocator));
    picker.open("map", &map_config()).await.unwrap();

    let mut form = open_form();
    picker.click(GeoPoint::new(-70.60, -33.40), &mut form);
    picker.click(GeoPoint::new(-70.64, -33.45), &mut form);

    assert_eq!(
        form.fields().destination.as_deref(),
        Some("-70.64,-33.45")
    );
    assert_eq!(picker.selection().marker, Some(GeoPoint::new(-70.64, -33.45)));
    assert_eq!(surface.marker(), Some(GeoPoint::new(-70.64, -33.45)));
    // The marker was repositioned, not destroyed and recreated.
    assert_eq!(surface.marker_creations(), 1);
}
