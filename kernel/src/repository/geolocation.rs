use crate::model::geo::GeoPoint;
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait Geolocator: Send + Sync {
    /// Resolves the device's current position, preferring high accuracy.
    async fn current_position(&self) -> AppResult<GeoPoint>;
}
