use async_trait::async_trait;
use kernel::model::geo::GeoPoint;
use kernel::repository::geolocation::Geolocator;
use reqwest::Client;
use serde::Deserialize;
use shared::{
    config::GeolocationConfig,
    error::{AppError, AppResult},
};

/// Coarse `Geolocator` over an IP geolocation endpoint. The headless
/// shell has no GPS; IP lookup is the closest available position source.
pub struct IpGeolocator {
    http: Client,
    endpoint: String,
}

#[derive(Deserialize)]
struct IpLocation {
    latitude: f64,
    longitude: f64,
}

impl IpGeolocator {
    pub fn new(config: &GeolocationConfig) -> Self {
        Self {
            http: Client::new(),
            endpoint: config.endpoint.clone(),
        }
    }
}

#[async_trait]
impl Geolocator for IpGeolocator {
    async fn current_position(&self) -> AppResult<GeoPoint> {
        let response = self.http.get(&self.endpoint).send().await?;
        if !response.status().is_success() {
            return Err(AppError::GeolocationError(format!(
                "geolocation lookup failed with status {}",
                response.status()
            )));
        }
        let location: IpLocation = response.json().await?;
        Ok(GeoPoint::new(location.longitude, location.latitude))
    }
}
